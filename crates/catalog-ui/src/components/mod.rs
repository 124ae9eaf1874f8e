pub(crate) mod empty_state;
pub(crate) mod login_form;
pub(crate) mod product_card;
pub(crate) mod product_grid;
pub(crate) mod scroll_sentinel;
pub(crate) mod search_input;
