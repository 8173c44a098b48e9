// Keeps links instead of launching them.

use crate::shared::infrastructure::link_opener::{LinkOpenError, LinkOpener};
use std::sync::Mutex;

#[derive(Default)]
pub struct CollectingLinkOpener {
    opened: Mutex<Vec<String>>,
    is_blocked: bool,
}

impl CollectingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_blocked(&mut self) {
        self.is_blocked = !self.is_blocked;
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|links| links.clone())
            .unwrap_or_default()
    }

    pub fn last_opened(&self) -> Option<String> {
        self.opened().pop()
    }
}

impl LinkOpener for CollectingLinkOpener {
    fn open(&self, uri: &str) -> Result<(), LinkOpenError> {
        if self.is_blocked {
            return Err(LinkOpenError::Blocked("Link opener blocked".into()));
        }
        self.opened
            .lock()
            .map_err(|_| LinkOpenError::Blocked("Link opener state poisoned".into()))?
            .push(uri.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod collecting_link_opener_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_collect_opened_links_in_order() {
        let opener = CollectingLinkOpener::new();
        opener.open("https://wa.me/1").unwrap();
        opener.open("mailto:a@b.c").unwrap();
        assert_eq!(opener.opened(), vec!["https://wa.me/1", "mailto:a@b.c"]);
        assert_eq!(opener.last_opened().as_deref(), Some("mailto:a@b.c"));
    }

    #[rstest]
    fn it_should_refuse_links_when_blocked() {
        let mut opener = CollectingLinkOpener::new();
        opener.toggle_blocked();
        let result = opener.open("https://wa.me/1");
        assert_eq!(
            result,
            Err(LinkOpenError::Blocked("Link opener blocked".into()))
        );
        assert!(opener.opened().is_empty());
        assert_eq!(opener.last_opened(), None);
    }
}
