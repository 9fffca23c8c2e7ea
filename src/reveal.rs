//! Incremental Reveal Controller
//!
//! Tracks how much of the filtered set is displayed. An extension is a
//! two-step transition: `begin_extend` hands out a ticket, `complete` applies
//! it after the scheduled delay. Every reset bumps the generation, so a
//! ticket issued against an older filtered set completes as a no-op.

/// Items revealed per step
pub const PAGE_SIZE: usize = 20;

/// Proof that an extension was started against a particular filtered set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealWindow {
    page_size: usize,
    displayed: usize,
    loading_more: bool,
    generation: u64,
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl RevealWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            displayed: 0,
            loading_more: false,
            generation: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn is_exhausted(&self, filtered_len: usize) -> bool {
        self.displayed >= filtered_len
    }

    /// Start over for a new filtered set of `filtered_len` items.
    pub fn reset(&mut self, filtered_len: usize) {
        self.generation = self.generation.wrapping_add(1);
        self.displayed = self.page_size.min(filtered_len);
        self.loading_more = false;
    }

    /// Whether `begin_extend` would hand out a ticket
    pub fn can_extend(&self, filtered_len: usize) -> bool {
        !self.loading_more && !self.is_exhausted(filtered_len)
    }

    /// Enter the extending state, or `None` if busy or exhausted.
    pub fn begin_extend(&mut self, filtered_len: usize) -> Option<ExtendTicket> {
        if !self.can_extend(filtered_len) {
            return None;
        }
        self.loading_more = true;
        Some(ExtendTicket {
            generation: self.generation,
        })
    }

    /// Append the next page. Returns false for a superseded ticket.
    pub fn complete(&mut self, ticket: ExtendTicket, filtered_len: usize) -> bool {
        if ticket.generation != self.generation || !self.loading_more {
            return false;
        }
        self.displayed = (self.displayed + self.page_size).min(filtered_len);
        self.loading_more = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clamps_to_page() {
        let mut window = RevealWindow::default();
        window.reset(25);
        assert_eq!(window.displayed(), 20);

        window.reset(7);
        assert_eq!(window.displayed(), 7);
        assert!(window.is_exhausted(7));

        window.reset(0);
        assert_eq!(window.displayed(), 0);
    }

    #[test]
    fn test_extend_appends_remaining() {
        let mut window = RevealWindow::default();
        window.reset(25);

        let ticket = window.begin_extend(25).expect("more to load");
        assert!(window.loading_more());
        assert!(window.complete(ticket, 25));
        assert_eq!(window.displayed(), 25);
        assert!(!window.loading_more());
    }

    #[test]
    fn test_extend_is_not_reentrant() {
        let mut window = RevealWindow::default();
        window.reset(50);

        let ticket = window.begin_extend(50).unwrap();
        assert_eq!(window.begin_extend(50), None);
        assert!(window.complete(ticket, 50));
        assert_eq!(window.displayed(), 40);
    }

    #[test]
    fn test_exhausted_window_is_noop() {
        let mut window = RevealWindow::default();
        window.reset(3);
        assert_eq!(window.begin_extend(3), None);
        assert!(!window.loading_more());
    }

    #[test]
    fn test_repeated_extension_reaches_end() {
        let mut window = RevealWindow::new(20);
        window.reset(65);
        while let Some(ticket) = window.begin_extend(65) {
            assert!(window.complete(ticket, 65));
        }
        assert_eq!(window.displayed(), 65);
        assert_eq!(window.begin_extend(65), None);
    }

    #[test]
    fn test_stale_ticket_is_ignored_after_reset() {
        let mut window = RevealWindow::default();
        window.reset(100);
        let stale = window.begin_extend(100).unwrap();

        window.reset(30);
        assert!(!window.loading_more());
        assert!(!window.complete(stale, 30));
        assert_eq!(window.displayed(), 20);

        // A fresh ticket still works
        let fresh = window.begin_extend(30).unwrap();
        assert!(window.complete(fresh, 30));
        assert_eq!(window.displayed(), 30);
    }

    #[test]
    fn test_ticket_cannot_be_applied_twice() {
        let mut window = RevealWindow::default();
        window.reset(100);
        let ticket = window.begin_extend(100).unwrap();
        assert!(window.complete(ticket, 100));
        assert!(!window.complete(ticket, 100));
        assert_eq!(window.displayed(), 40);
    }

    #[test]
    fn test_zero_page_size_clamps_to_one() {
        let mut window = RevealWindow::new(0);
        window.reset(5);
        assert_eq!(window.page_size(), 1);
        assert_eq!(window.displayed(), 1);
    }
}
