/// Accordion where at most one panel is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Accordion<Id> {
    open: Option<Id>,
}

impl<Id> Default for Accordion<Id> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<Id: PartialEq + Clone> Accordion<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `id`, closing whatever was open. Toggling the open panel closes it.
    pub fn toggle(&mut self, id: Id) {
        if self.open.as_ref() == Some(&id) {
            self.open = None;
        } else {
            self.open = Some(id);
        }
    }

    pub fn is_open(&self, id: &Id) -> bool {
        self.open.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let accordion: Accordion<&str> = Accordion::new();
        assert!(!accordion.is_open(&"licensing"));
    }

    #[test]
    fn toggling_twice_closes() {
        let mut accordion = Accordion::new();
        accordion.toggle("licensing");
        assert!(accordion.is_open(&"licensing"));
        accordion.toggle("licensing");
        assert_eq!(accordion, Accordion::new());
    }

    #[test]
    fn opening_another_closes_the_first() {
        let mut accordion = Accordion::new();
        accordion.toggle(1);
        accordion.toggle(2);
        assert!(!accordion.is_open(&1));
        assert!(accordion.is_open(&2));
    }
}
