pub mod aggregate;

pub use aggregate::{Expense, ExpenseDto, ENTITY_METADATA};
