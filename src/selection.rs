use chrono::NaiveDate;

/// One end of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CheckIn,
    CheckOut,
}

/// What a click did to the selection. `Completed` tells the caller the
/// range is committed and the calendar view can be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Anchored,
    Completed,
}

/// Visual category of a single day cell. A day falls into exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCategory {
    Past,
    CheckIn,
    CheckOut,
    InRange,
    Plain,
}

/// Check-in/check-out selection over midnight-normalized dates.
///
/// Holds at most two committed endpoints and, while only the anchor is
/// set, the date currently under the cursor for range preview. If both
/// endpoints are set then `check_in <= check_out`; every transition
/// below keeps that ordering by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    hover: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn new() -> Self {
        RangeSelection::default()
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn hover(&self) -> Option<NaiveDate> {
        self.hover
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Option<NaiveDate> {
        match endpoint {
            Endpoint::CheckIn => self.check_in,
            Endpoint::CheckOut => self.check_out,
        }
    }

    /// Applies a single date activation.
    ///
    /// Without an anchor the date becomes the check-in. With an anchor,
    /// an earlier date moves the anchor and a later (or equal) date
    /// commits the checkout. With a committed range, an earlier date
    /// starts a fresh range and anything else replaces the checkout.
    pub fn click(&mut self, date: NaiveDate) -> ClickOutcome {
        let prev_check_out = self.check_out;

        let outcome = match (self.check_in, self.check_out) {
            (None, _) => {
                self.check_in = Some(date);
                ClickOutcome::Anchored
            }
            (Some(anchor), None) if date < anchor => {
                self.check_in = Some(date);
                ClickOutcome::Anchored
            }
            (Some(_), None) => {
                self.check_out = Some(date);
                self.hover = None;
                ClickOutcome::Completed
            }
            (Some(anchor), Some(_)) if date < anchor => {
                self.check_in = Some(date);
                self.check_out = None;
                ClickOutcome::Anchored
            }
            (Some(_), Some(_)) => {
                self.check_out = Some(date);
                self.hover = None;
                ClickOutcome::Completed
            }
        };

        // Corner case: a click landing strictly after the checkout that
        // was committed *before* this click reopens the range. Compared
        // against the pre-click value, not the one assigned above.
        if prev_check_out.map_or(false, |out| date > out) {
            self.check_out = None;
        }

        log::debug!(
            "click on {} -> {:?} (check-in {:?}, check-out {:?})",
            date,
            outcome,
            self.check_in,
            self.check_out
        );

        outcome
    }

    /// Records the date under the cursor for preview highlighting. Only
    /// meaningful while an anchor waits for its checkout; a no-op in
    /// every other state.
    pub fn set_hover(&mut self, date: NaiveDate) {
        if self.check_in.is_some() && self.check_out.is_none() {
            self.hover = Some(date);
        }
    }

    /// Unsets one endpoint, leaving the other untouched. A cleared
    /// check-in with a remaining checkout is tolerated, not rejected.
    pub fn clear(&mut self, endpoint: Endpoint) {
        match endpoint {
            Endpoint::CheckIn => self.check_in = None,
            Endpoint::CheckOut => self.check_out = None,
        }
        self.hover = None;
    }

    /// True iff `date` lies strictly between the range ends: between
    /// anchor and hover while the checkout is still open, between the
    /// two endpoints once committed. Endpoints themselves never count.
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        if let (Some(anchor), Some(hovered), None) = (self.check_in, self.hover, self.check_out) {
            let start = anchor.min(hovered);
            let end = anchor.max(hovered);
            return date > start && date < end;
        }

        if let (Some(start), Some(end)) = (self.check_in, self.check_out) {
            return date > start && date < end;
        }

        false
    }

    /// Categorizes a day cell. Precedence: past, check-in, check-out,
    /// in-range.
    pub fn classify(&self, date: NaiveDate, today: NaiveDate) -> DayCategory {
        if date < today {
            DayCategory::Past
        } else if self.check_in == Some(date) {
            DayCategory::CheckIn
        } else if self.check_out == Some(date) {
            DayCategory::CheckOut
        } else if self.is_in_range(date) {
            DayCategory::InRange
        } else {
            DayCategory::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_click_anchors() {
        let mut sel = RangeSelection::new();
        assert_eq!(sel.click(date(2024, 3, 10)), ClickOutcome::Anchored);
        assert_eq!(sel.check_in(), Some(date(2024, 3, 10)));
        assert_eq!(sel.check_out(), None);
    }

    #[test]
    fn second_click_after_anchor_completes() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        assert_eq!(sel.click(date(2024, 3, 15)), ClickOutcome::Completed);
        assert_eq!(sel.check_in(), Some(date(2024, 3, 10)));
        assert_eq!(sel.check_out(), Some(date(2024, 3, 15)));
    }

    #[test]
    fn earlier_click_moves_anchor() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        assert_eq!(sel.click(date(2024, 3, 5)), ClickOutcome::Anchored);
        assert_eq!(sel.check_in(), Some(date(2024, 3, 5)));
        assert_eq!(sel.check_out(), None);
    }

    #[test]
    fn click_before_committed_range_reopens_with_new_anchor() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 3, 15));
        assert_eq!(sel.click(date(2024, 3, 1)), ClickOutcome::Anchored);
        assert_eq!(sel.check_in(), Some(date(2024, 3, 1)));
        assert_eq!(sel.check_out(), None);
    }

    #[test]
    fn click_inside_committed_range_replaces_checkout() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 3, 15));
        assert_eq!(sel.click(date(2024, 3, 12)), ClickOutcome::Completed);
        assert_eq!(sel.check_in(), Some(date(2024, 3, 10)));
        assert_eq!(sel.check_out(), Some(date(2024, 3, 12)));
    }

    #[test]
    fn click_past_committed_checkout_reopens() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 3, 15));
        // Still reported as completed, but the stale-checkout rule drops
        // the checkout again: the range reopens from the old anchor.
        assert_eq!(sel.click(date(2024, 3, 20)), ClickOutcome::Completed);
        assert_eq!(sel.check_in(), Some(date(2024, 3, 10)));
        assert_eq!(sel.check_out(), None);
    }

    #[test]
    fn ordering_invariant_holds_over_click_sequences() {
        let days: Vec<NaiveDate> = (1..=28).map(|d| date(2024, 3, d)).collect();

        let mut sel = RangeSelection::new();
        for (i, &d) in days.iter().enumerate() {
            sel.click(days[(i * 11 + 3) % days.len()]);
            sel.click(d);
            if let (Some(ci), Some(co)) = (sel.check_in(), sel.check_out()) {
                assert!(ci <= co, "check-in {} after check-out {}", ci, co);
            }
        }
    }

    #[test]
    fn clear_is_idempotent_and_per_field() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 3, 15));

        sel.clear(Endpoint::CheckIn);
        let once = sel;
        sel.clear(Endpoint::CheckIn);
        assert_eq!(sel, once);
        assert_eq!(sel.check_in(), None);
        // Checkout survives a check-in clear.
        assert_eq!(sel.check_out(), Some(date(2024, 3, 15)));
    }

    #[test]
    fn clear_on_empty_selection_is_a_noop() {
        let mut sel = RangeSelection::new();
        sel.clear(Endpoint::CheckOut);
        assert_eq!(sel, RangeSelection::new());
    }

    #[test]
    fn hover_only_sticks_while_anchored() {
        let mut sel = RangeSelection::new();
        sel.set_hover(date(2024, 3, 12));
        assert_eq!(sel.hover(), None);

        sel.click(date(2024, 3, 10));
        sel.set_hover(date(2024, 3, 12));
        assert_eq!(sel.hover(), Some(date(2024, 3, 12)));

        sel.click(date(2024, 3, 15));
        assert_eq!(sel.hover(), None);
        sel.set_hover(date(2024, 3, 12));
        assert_eq!(sel.hover(), None);
    }

    #[test]
    fn preview_range_is_order_independent() {
        let mut forward = RangeSelection::new();
        forward.click(date(2024, 3, 10));
        forward.set_hover(date(2024, 3, 20));

        let mut backward = RangeSelection::new();
        backward.click(date(2024, 3, 20));
        backward.set_hover(date(2024, 3, 10));

        for d in 1..=28 {
            let probe = date(2024, 3, d);
            assert_eq!(forward.is_in_range(probe), backward.is_in_range(probe));
        }
        assert!(forward.is_in_range(date(2024, 3, 15)));
        assert!(!forward.is_in_range(date(2024, 3, 10)));
        assert!(!forward.is_in_range(date(2024, 3, 20)));
    }

    #[test]
    fn committed_range_excludes_endpoints() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 3, 15));

        assert!(sel.is_in_range(date(2024, 3, 12)));
        assert!(!sel.is_in_range(date(2024, 3, 10)));
        assert!(!sel.is_in_range(date(2024, 3, 15)));
        assert!(!sel.is_in_range(date(2024, 3, 16)));
    }

    #[test]
    fn classification_precedence() {
        let today = date(2024, 1, 1);
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 3, 15));

        assert_eq!(sel.classify(date(2024, 3, 10), today), DayCategory::CheckIn);
        assert_eq!(
            sel.classify(date(2024, 3, 15), today),
            DayCategory::CheckOut
        );
        assert_eq!(sel.classify(date(2024, 3, 12), today), DayCategory::InRange);
        assert_eq!(sel.classify(date(2024, 3, 20), today), DayCategory::Plain);
        // Past wins even over an endpoint match.
        assert_eq!(
            sel.classify(date(2024, 3, 10), date(2024, 4, 1)),
            DayCategory::Past
        );
    }

    #[test]
    fn checkout_without_checkin_is_tolerated() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 3, 15));
        sel.clear(Endpoint::CheckIn);

        // Clicking before the orphaned checkout re-anchors around it.
        assert_eq!(sel.click(date(2024, 3, 12)), ClickOutcome::Anchored);
        assert_eq!(sel.check_in(), Some(date(2024, 3, 12)));
        assert_eq!(sel.check_out(), Some(date(2024, 3, 15)));

        // Clicking past it drops the stale checkout.
        sel.clear(Endpoint::CheckIn);
        assert_eq!(sel.click(date(2024, 3, 20)), ClickOutcome::Anchored);
        assert_eq!(sel.check_in(), Some(date(2024, 3, 20)));
        assert_eq!(sel.check_out(), None);
    }
}
