use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    symbols::types::VarType,
    Position, MK_ERROR,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    pub parameters: Vec<VarType>,
}

impl MethodSignature {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Every method of the file, keyed by name. Filled by the pre-scan.
#[derive(Debug, Default)]
pub struct MethodRegistry {
    methods: HashMap<String, MethodSignature>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, signature: MethodSignature, position: &Position) -> Result<(), Error> {
        if self.methods.contains_key(&signature.name) {
            return Err(MK_ERROR!(
                ErrorImpl::MethodAlreadyDeclared {
                    method: signature.name
                },
                position
            ));
        }

        log::trace!(
            "registered method `{}` with {} parameter(s)",
            signature.name,
            signature.arity()
        );
        self.methods.insert(signature.name.clone(), signature);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MethodSignature> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
