use crate::controller::form::ProductDraft;
use crate::domain::response::{pagination::Pagination, product::ProductResponse};

/// Everything the product list view renders from. Mutated only by the
/// controller that owns it.
#[derive(Debug, Clone)]
pub struct ProductListState {
    pub items: Vec<ProductResponse>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
    pub form: FormState,
}

impl ProductListState {
    pub fn new(size: i32) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            pagination: Pagination {
                page: 0,
                size,
                total: 0,
            },
            form: FormState::default(),
        }
    }
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Form visibility plus mode: `editing == None` means create mode,
/// `Some(product)` means update mode for that product.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub visible: bool,
    pub editing: Option<ProductResponse>,
    pub draft: ProductDraft,
}
