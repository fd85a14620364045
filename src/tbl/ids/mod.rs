mod account_number;
mod cpf;

pub use account_number::AccountNumber;
pub use cpf::{is_valid_cpf, Cpf, CpfError};
