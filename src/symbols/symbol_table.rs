use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_ERROR,
};

use super::{
    types::VarType,
    variable::{GlobalOrigin, Variable, VariableStatus},
};

/// The bindings of one lexical block.
#[derive(Debug, Default)]
pub struct Frame {
    pub variable_lookup: HashMap<String, Variable>,
}

impl Frame {
    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.variable_lookup.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variable_lookup.contains_key(name)
    }
}

/// Stack of scope frames. Frame 0 is the global scope and is never popped.
///
/// Lookups walk from the innermost frame outwards and stop at the first frame
/// binding the name, so inner declarations shadow outer ones. Entering a scope
/// never copies bindings forward, and status changes stay on the binding that
/// was found.
#[derive(Debug)]
pub struct SymbolTable {
    frames: Vec<Frame>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            frames: vec![Frame::default()],
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_global_scope(&self) -> bool {
        self.frames.len() == 1
    }

    pub fn enter_scope(&mut self) {
        self.frames.push(Frame::default());
        log::trace!("entered frame {}", self.frames.len() - 1);
    }

    pub fn exit_scope(&mut self, position: &Position) -> Result<(), Error> {
        if self.is_global_scope() {
            return Err(MK_ERROR!(ErrorImpl::InvalidScopeExit, position));
        }

        self.frames.pop();
        log::trace!("left frame {}", self.frames.len());
        Ok(())
    }

    /// Binds `name` in the innermost frame.
    pub fn declare(
        &mut self,
        name: &str,
        var_type: VarType,
        is_final: bool,
        has_initializer: bool,
        position: &Position,
    ) -> Result<(), Error> {
        let current = self.current_frame_mut();

        if current.contains(name) {
            return Err(MK_ERROR!(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.to_string()
                },
                position
            ));
        }

        current.variable_lookup.insert(
            name.to_string(),
            Variable::new(name.to_string(), var_type, is_final, has_initializer),
        );
        Ok(())
    }

    /// Records a global binding found by the pre-scan.
    pub fn seed_global(
        &mut self,
        name: &str,
        var_type: VarType,
        is_final: bool,
        has_initializer: bool,
        position: &Position,
    ) -> Result<(), Error> {
        let globals = &mut self.frames[0];

        if globals.contains(name) {
            return Err(MK_ERROR!(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.to_string()
                },
                position
            ));
        }

        let mut variable = Variable::new(name.to_string(), var_type, is_final, has_initializer);
        variable.origin = Some(GlobalOrigin::Seeded);
        globals.variable_lookup.insert(name.to_string(), variable);
        log::trace!("seeded global `{}` as {}", name, var_type);
        Ok(())
    }

    /// Confirms a global declaration during the main pass.
    ///
    /// A seeded binding of the same type and finality is kept and its status is
    /// only ever raised, so assignments the pre-scan already saw stay visible.
    pub fn finalize_global(
        &mut self,
        name: &str,
        var_type: VarType,
        is_final: bool,
        has_initializer: bool,
        position: &Position,
    ) -> Result<(), Error> {
        let globals = &mut self.frames[0];

        let Some(existing) = globals.variable_lookup.get_mut(name) else {
            let mut variable =
                Variable::new(name.to_string(), var_type, is_final, has_initializer);
            variable.origin = Some(GlobalOrigin::Finalized);
            globals.variable_lookup.insert(name.to_string(), variable);
            return Ok(());
        };

        if existing.origin != Some(GlobalOrigin::Seeded)
            || existing.var_type != var_type
            || existing.is_final != is_final
        {
            return Err(MK_ERROR!(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.to_string()
                },
                position
            ));
        }

        existing.origin = Some(GlobalOrigin::Finalized);
        if has_initializer {
            existing.promote(VariableStatus::Assigned);
        }
        Ok(())
    }

    /// Assigns a value of `value_type` to the nearest binding of `name`.
    pub fn assign(
        &mut self,
        name: &str,
        value_type: VarType,
        position: &Position,
    ) -> Result<(), Error> {
        let Some(variable) = self.lookup_mut(name) else {
            return Err(MK_ERROR!(
                ErrorImpl::VariableNotDeclared {
                    variable: name.to_string()
                },
                position
            ));
        };

        if variable.is_final {
            return Err(MK_ERROR!(
                ErrorImpl::FinalReassignment {
                    variable: name.to_string()
                },
                position
            ));
        }

        if !variable.var_type.accepts(value_type) {
            return Err(MK_ERROR!(
                ErrorImpl::TypeMatchError {
                    expected: variable.var_type.to_string(),
                    received: value_type.to_string()
                },
                position
            ));
        }

        variable.promote(VariableStatus::Assigned);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get_variable(name))
    }

    fn lookup_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.variable_lookup.get_mut(name))
    }

    pub fn global(&self, name: &str) -> Option<&Variable> {
        self.frames[0].get_variable(name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn is_assigned(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(Variable::is_assigned)
    }

    pub fn type_of(&self, name: &str) -> Option<VarType> {
        self.lookup(name).map(|variable| variable.var_type)
    }

    fn current_frame_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}
