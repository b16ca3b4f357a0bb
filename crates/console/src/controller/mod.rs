mod form;
mod product_list;
mod state;

pub use self::form::{ProductDraft, ProductInput};
pub use self::product_list::{Effect, OpTicket, ProductListController, SubmitAction};
pub use self::state::{FormState, ProductListState};
