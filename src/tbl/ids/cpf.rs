use std::fmt;

use thiserror::Error;

const CPF_LEN: usize = 11;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CpfError {
    #[error("Invalid CPF {0:?}: expected exactly 11 digits")]
    Invalid(String),
}

/// True only for strings made of exactly 11 ASCII digits
pub fn is_valid_cpf(cpf: &str) -> bool {
    cpf.len() == CPF_LEN && cpf.bytes().all(|b| b.is_ascii_digit())
}

/// National identifier of a client, validated on construction
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(cpf: &str) -> Result<Self, CpfError> {
        if !is_valid_cpf(cpf) {
            return Err(CpfError::Invalid(cpf.to_string()));
        }

        Ok(Self(cpf.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
