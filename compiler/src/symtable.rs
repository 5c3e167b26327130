use std::collections::HashMap;

use crate::{error::CompilerError, tree::Value};

/// A registered name. `name` and `lineno` are fixed once added.
#[derive(Debug, PartialEq, Clone)]
pub struct Symbol {
    pub name: String,
    pub lineno: usize,
    attrs: HashMap<String, Value>,
}

impl Symbol {
    pub fn sym_type(&self) -> Option<&Value> {
        self.attrs.get("type")
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }
}

/// `name` and `lineno` live on the symbol itself and never in its attributes.
fn check_attrs(name: &str, attrs: &[(String, Value)]) -> Result<(), CompilerError> {
    match attrs
        .iter()
        .find(|(key, _)| key == "name" || key == "lineno")
    {
        Some((key, _)) => Err(CompilerError::Internal(format!(
            "Cannot modify symbol '{}' attribute '{}'.",
            name, key
        ))),
        None => Ok(()),
    }
}

/// Name to attributes registry, owned by whichever phase needs it.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn add_symbol(
        &mut self,
        name: &str,
        sym_type: &str,
        lineno: usize,
        attrs: Vec<(String, Value)>,
    ) -> Result<&Symbol, CompilerError> {
        if let Some(existing) = self.symbols.get(name) {
            return Err(CompilerError::SymbolRedefinition {
                name: name.to_owned(),
                line: lineno,
                previous_line: existing.lineno,
            });
        }

        check_attrs(name, &attrs)?;

        let mut attrs: HashMap<String, Value> = attrs.into_iter().collect();
        attrs.insert("type".to_owned(), sym_type.into());

        let symbol: &Symbol = self.symbols.entry(name.to_owned()).or_insert(Symbol {
            name: name.to_owned(),
            lineno,
            attrs,
        });

        Ok(symbol)
    }

    pub fn set_symbol(
        &mut self,
        name: &str,
        attrs: Vec<(String, Value)>,
    ) -> Result<(), CompilerError> {
        let symbol = self
            .symbols
            .get_mut(name)
            .ok_or_else(|| CompilerError::Internal(format!("Symbol not defined: {}", name)))?;

        check_attrs(name, &attrs)?;
        symbol.attrs.extend(attrs);
        Ok(())
    }

    pub fn get_symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }
}
