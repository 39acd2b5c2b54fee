use crate::view::ListView;

/// A mutable handle on a caller-owned list.
///
/// The `_in_place` operations rewrite the list with a single forward pass,
/// so callbacks see every element exactly once and in order.
pub struct ListHelper<'a, T> {
    list: &'a mut Vec<T>,
}

impl<'a, T> ListHelper<'a, T> {
    pub fn new(list: &'a mut Vec<T>) -> Self {
        ListHelper { list }
    }

    /// Read-only operations over the list's current contents.
    pub fn view(&self) -> ListView<'_, T> {
        ListView::new(self.list.as_slice())
    }

    pub fn into_inner(self) -> &'a mut Vec<T> {
        self.list
    }

    pub fn map_in_place<F>(&mut self, mut func: F)
    where
        F: FnMut(&T) -> T,
    {
        for item in self.list.iter_mut() {
            *item = func(item);
        }
    }

    /// Keeps only the elements matching `pred`.
    pub fn select_in_place<F>(&mut self, pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.list.retain(pred);
    }

    /// Removes the elements matching `pred`.
    pub fn reject_in_place<F>(&mut self, mut pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.list.retain(|t| !pred(t));
    }

    pub fn push(&mut self, item: T) -> &mut Self {
        self.list.push(item);
        self
    }

    pub fn insert(&mut self, item: T) -> &mut Self {
        self.push(item)
    }

    pub fn push_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.list.extend(items);
        self
    }

    pub fn insert_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.push_all(items)
    }
}

impl<U> ListHelper<'_, Option<U>> {
    pub fn compact_in_place(&mut self) {
        self.list.retain(Option::is_some);
    }
}

impl<'a, T> From<&'a mut Vec<T>> for ListHelper<'a, T> {
    fn from(list: &'a mut Vec<T>) -> Self {
        ListHelper::new(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> Vec<i32> {
        (1..=9).collect()
    }

    #[test]
    fn map_in_place_replaces_each_element() {
        let mut strings: Vec<String> = ["A", "B", "DA", "ABC"].map(String::from).into();
        ListHelper::new(&mut strings).map_in_place(|s| {
            if s.starts_with('A') {
                format!("{s}B")
            } else {
                s.clone()
            }
        });
        assert_eq!(strings, ["AB", "B", "DA", "ABCB"]);
    }

    #[test]
    fn select_in_place_keeps_matches() {
        let mut numbers = numbers();
        ListHelper::new(&mut numbers).select_in_place(|&n| n < 4);
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn reject_in_place_drops_matches() {
        let mut numbers = numbers();
        ListHelper::new(&mut numbers).reject_in_place(|&n| n < 4);
        assert_eq!(numbers, [4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn removal_visits_every_element_once() {
        let mut numbers = vec![2, 2, 3, 3, 4];
        let mut seen = Vec::new();
        ListHelper::new(&mut numbers).reject_in_place(|&n| {
            seen.push(n);
            n % 2 == 0
        });
        assert_eq!(seen, [2, 2, 3, 3, 4]);
        assert_eq!(numbers, [3, 3]);
    }

    #[test]
    fn compact_in_place_removes_none() {
        let mut values: Vec<Option<i32>> = numbers().into_iter().map(Some).collect();
        let mut helper = ListHelper::new(&mut values);
        helper.push_all([None, None, None]);
        helper.compact_in_place();
        assert_eq!(helper.view().count(), 9);
        assert!(values.iter().all(Option::is_some));
    }

    #[test]
    fn push_chains() {
        let mut strings = vec!["A", "B"];
        ListHelper::new(&mut strings)
            .insert("F")
            .push("G")
            .insert_all(["H", "I"]);
        assert_eq!(strings, ["A", "B", "F", "G", "H", "I"]);
    }

    #[test]
    fn view_sees_mutations() {
        let mut numbers = numbers();
        let mut helper = ListHelper::from(&mut numbers);
        helper.select_in_place(|&n| n % 3 == 0);
        assert_eq!(helper.view().last(), Some(&9));
        assert_eq!(helper.view().reduce(0, |acc, n| acc + n), 18);
        helper.into_inner().clear();
        assert!(numbers.is_empty());
    }
}
