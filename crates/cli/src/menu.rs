//! Main menu text and the selectors read from it.

/// Menu printed at the top of every loop iteration.
pub const MENU: &str = "Inventory Management System:\n\
1. Add Product\n\
2. Update Product\n\
3. View All Products\n\
4. Update Stock\n\
5. Exit\n";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    AddProduct,
    UpdateProduct,
    ViewAll,
    UpdateStock,
    Exit,
}

impl MenuChoice {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::AddProduct),
            2 => Some(Self::UpdateProduct),
            3 => Some(Self::ViewAll),
            4 => Some(Self::UpdateStock),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::AddProduct => 1,
            Self::UpdateProduct => 2,
            Self::ViewAll => 3,
            Self::UpdateStock => 4,
            Self::Exit => 5,
        }
    }
}

/// Product type selector on the add flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Perishable,
    NonPerishable,
}

impl ProductType {
    /// `1` selects perishable; every other value selects non-perishable.
    pub fn from_code(code: i64) -> Self {
        if code == 1 {
            Self::Perishable
        } else {
            Self::NonPerishable
        }
    }
}
