use super::types::VarType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VariableStatus {
    Declared,
    Assigned,
    /// A `final` binding; assigned at declaration and locked.
    Final,
}

/// Whether a global binding has only been seen by the pre-scan yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalOrigin {
    Seeded,
    Finalized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub var_type: VarType,
    pub is_final: bool,
    pub status: VariableStatus,
    pub origin: Option<GlobalOrigin>,
}

impl Variable {
    pub fn new(name: String, var_type: VarType, is_final: bool, has_initializer: bool) -> Self {
        let status = match (is_final, has_initializer) {
            (true, _) => VariableStatus::Final,
            (false, true) => VariableStatus::Assigned,
            (false, false) => VariableStatus::Declared,
        };

        Variable {
            name,
            var_type,
            is_final,
            status,
            origin: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.status != VariableStatus::Declared
    }

    pub fn is_global(&self) -> bool {
        self.origin.is_some()
    }

    /// Raises the status, never lowering it and never leaving `Final`.
    pub fn promote(&mut self, status: VariableStatus) {
        if status > self.status {
            self.status = status;
        }
    }
}
