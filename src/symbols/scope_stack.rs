use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_ERROR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Global,
    Method,
    If,
    While,
}

impl Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Control stack of the open blocks, bottomed by an implicit `Global`.
#[derive(Debug)]
pub struct ScopeStack {
    kinds: Vec<ScopeKind>,
    open_methods: usize,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            kinds: vec![ScopeKind::Global],
            open_methods: 0,
        }
    }

    pub fn push(&mut self, kind: ScopeKind) {
        if kind == ScopeKind::Method {
            self.open_methods += 1;
        }
        self.kinds.push(kind);
        log::trace!("pushed {} scope, depth {}", kind, self.kinds.len());
    }

    pub fn pop(&mut self, position: &Position) -> Result<ScopeKind, Error> {
        if self.is_global() {
            return Err(MK_ERROR!(ErrorImpl::InvalidScopeExit, position));
        }

        let kind = self.kinds.pop().unwrap_or(ScopeKind::Global);
        if kind == ScopeKind::Method {
            self.open_methods -= 1;
        }
        log::trace!("popped {} scope, depth {}", kind, self.kinds.len());
        Ok(kind)
    }

    pub fn open_method_count(&self) -> usize {
        self.open_methods
    }

    pub fn in_method(&self) -> bool {
        self.open_methods > 0
    }

    pub fn is_global(&self) -> bool {
        self.kinds.len() == 1
    }

    pub fn depth(&self) -> usize {
        self.kinds.len()
    }

    pub fn current(&self) -> ScopeKind {
        self.kinds.last().copied().unwrap_or(ScopeKind::Global)
    }
}
