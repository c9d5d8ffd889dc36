use jeonse_core::{assess, format_ratio, Assessment, PriceInput, SearchEndpoint};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Focus {
    #[default]
    Address,
    SalePrice,
    Deposit,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::Address => Focus::SalePrice,
            Focus::SalePrice => Focus::Deposit,
            Focus::Deposit => Focus::Address,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Focus::Address => Focus::Deposit,
            Focus::SalePrice => Focus::Address,
            Focus::Deposit => Focus::SalePrice,
        }
    }

    pub(crate) fn is_amount(self) -> bool {
        matches!(self, Focus::SalePrice | Focus::Deposit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    Link(String),
    MissingAddress,
}

/// Widget values of one session. Results are only refreshed by the two
/// actions, never while typing.
pub(crate) struct AppState {
    pub(crate) address: String,
    pub(crate) input: PriceInput,
    pub(crate) focus: Focus,
    pub(crate) search: Option<SearchOutcome>,
    pub(crate) assessment: Option<Assessment>,
    pub(crate) confirm_quit: bool,
    step: u64,
    endpoint: SearchEndpoint,
}

impl AppState {
    pub(crate) fn new(step: u64, endpoint: SearchEndpoint) -> Self {
        Self {
            address: String::new(),
            input: PriceInput::default(),
            focus: Focus::default(),
            search: None,
            assessment: None,
            confirm_quit: false,
            step: step.max(1),
            endpoint,
        }
    }

    pub(crate) fn step(&self) -> u64 {
        self.step
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = self.focus.next();
        tracing::debug!(focus = ?self.focus, "focus moved");
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        tracing::debug!(focus = ?self.focus, "focus moved");
    }

    pub(crate) fn amount(&self, field: Focus) -> Option<u64> {
        match field {
            Focus::SalePrice => Some(self.input.sale_price),
            Focus::Deposit => Some(self.input.deposit),
            Focus::Address => None,
        }
    }

    fn amount_mut(&mut self) -> Option<&mut u64> {
        match self.focus {
            Focus::SalePrice => Some(&mut self.input.sale_price),
            Focus::Deposit => Some(&mut self.input.deposit),
            Focus::Address => None,
        }
    }

    /// Address takes any printable character; amounts take digits and
    /// ignore a digit that would overflow.
    pub(crate) fn push_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        if self.focus == Focus::Address {
            self.address.push(ch);
            return;
        }
        let Some(digit) = ch.to_digit(10) else {
            return;
        };
        if let Some(value) = self.amount_mut() {
            if let Some(next) = value
                .checked_mul(10)
                .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            {
                *value = next;
            }
        }
    }

    pub(crate) fn pop_char(&mut self) {
        if self.focus == Focus::Address {
            self.address.pop();
            return;
        }
        if let Some(value) = self.amount_mut() {
            *value /= 10;
        }
    }

    pub(crate) fn clear_field(&mut self) {
        if self.focus == Focus::Address {
            self.address.clear();
            return;
        }
        if let Some(value) = self.amount_mut() {
            *value = 0;
        }
    }

    pub(crate) fn step_up(&mut self) {
        let step = self.step;
        if let Some(value) = self.amount_mut() {
            *value = value.saturating_add(step);
        }
    }

    pub(crate) fn step_down(&mut self) {
        let step = self.step;
        if let Some(value) = self.amount_mut() {
            *value = value.saturating_sub(step);
        }
    }

    /// Enter on the focused field: search from the address, compute from
    /// either amount.
    pub(crate) fn activate(&mut self) {
        if self.focus.is_amount() {
            self.compute();
        } else {
            self.open_search();
        }
    }

    pub(crate) fn open_search(&mut self) {
        let outcome = match self.endpoint.url_for(&self.address) {
            Some(url) => {
                tracing::info!(address = %self.address.trim(), url = %url, "search link built");
                SearchOutcome::Link(url)
            }
            None => {
                tracing::warn!("search requested without an address");
                SearchOutcome::MissingAddress
            }
        };
        self.search = Some(outcome);
    }

    pub(crate) fn compute(&mut self) {
        let assessment = assess(self.input);
        if assessment.is_defined() {
            tracing::info!(
                sale_price = self.input.sale_price,
                deposit = self.input.deposit,
                ratio = %format_ratio(assessment.ratio),
                risk = assessment.label,
                "ratio computed"
            );
        } else {
            tracing::warn!(
                sale_price = self.input.sale_price,
                deposit = self.input.deposit,
                "ratio undefined, sale price must be greater than 0"
            );
        }
        self.assessment = Some(assessment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jeonse_core::RiskLevel;

    fn app() -> AppState {
        AppState::new(100, SearchEndpoint::default())
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            app.push_char(ch);
        }
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Address);
        app.focus_next();
        assert_eq!(app.focus, Focus::SalePrice);
        app.focus_next();
        assert_eq!(app.focus, Focus::Deposit);
        app.focus_next();
        assert_eq!(app.focus, Focus::Address);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Deposit);
    }

    #[test]
    fn amounts_accept_digits_only() {
        let mut app = app();
        app.focus_next();
        type_str(&mut app, "1a0,0-00");
        assert_eq!(app.input.sale_price, 10_000);
        app.pop_char();
        assert_eq!(app.input.sale_price, 1_000);
    }

    #[test]
    fn overflowing_digit_is_ignored() {
        let mut app = app();
        app.focus_next();
        type_str(&mut app, &u64::MAX.to_string());
        assert_eq!(app.input.sale_price, u64::MAX);
        app.push_char('9');
        assert_eq!(app.input.sale_price, u64::MAX);
    }

    #[test]
    fn stepping_never_goes_below_zero() {
        let mut app = app();
        app.focus_next();
        app.step_up();
        app.step_up();
        assert_eq!(app.input.sale_price, 200);
        app.step_down();
        app.step_down();
        app.step_down();
        assert_eq!(app.input.sale_price, 0);
    }

    #[test]
    fn stepping_ignores_address() {
        let mut app = app();
        type_str(&mut app, "Mapo");
        app.step_up();
        assert_eq!(app.address, "Mapo");
        assert_eq!(app.input, PriceInput::default());
    }

    #[test]
    fn address_accepts_hangul_and_spaces() {
        let mut app = app();
        type_str(&mut app, "강남 래미안");
        assert_eq!(app.address, "강남 래미안");
        app.pop_char();
        assert_eq!(app.address, "강남 래미");
        app.clear_field();
        assert!(app.address.is_empty());
    }

    #[test]
    fn search_with_blank_address_warns() {
        let mut app = app();
        type_str(&mut app, "   ");
        app.activate();
        assert_eq!(app.search, Some(SearchOutcome::MissingAddress));
    }

    #[test]
    fn search_builds_link() {
        let mut app = app();
        type_str(&mut app, "Gangnam Apt");
        app.activate();
        assert_eq!(
            app.search,
            Some(SearchOutcome::Link(
                "https://new.land.naver.com/search?sk=Gangnam%20Apt".to_string()
            ))
        );
        assert!(app.assessment.is_none());
    }

    #[test]
    fn compute_on_amount_field() {
        let mut app = app();
        app.focus_next();
        type_str(&mut app, "10000");
        app.focus_next();
        type_str(&mut app, "8000");
        app.activate();
        let assessment = app.assessment.as_ref().expect("assessment");
        assert_eq!(assessment.ratio, Some(80.0));
        assert_eq!(assessment.risk, RiskLevel::Danger);
        assert!(app.search.is_none());
    }

    #[test]
    fn zero_price_keeps_inputs() {
        let mut app = app();
        app.focus = Focus::Deposit;
        type_str(&mut app, "5000");
        app.compute();
        let assessment = app.assessment.as_ref().expect("assessment");
        assert!(!assessment.is_defined());
        assert_eq!(app.input.deposit, 5_000);
    }

    #[test]
    fn result_waits_for_next_compute() {
        let mut app = app();
        app.input = PriceInput::new(10_000, 5_000);
        app.compute();
        app.focus = Focus::Deposit;
        app.push_char('0');
        let assessment = app.assessment.as_ref().expect("assessment");
        assert_eq!(assessment.ratio, Some(50.0));
        app.compute();
        let assessment = app.assessment.as_ref().expect("assessment");
        assert_eq!(assessment.ratio, Some(500.0));
    }
}
