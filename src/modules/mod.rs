//! The module registry and the built-in module catalog.
//!
//! A module pairs a default output format and a data bag with an execute
//! function that pulls facts from a [`FactProvider`] and expands the format.
//! The registry is built once at startup and read-only afterwards; per-run
//! format and data overrides from the configuration are applied to a copy of
//! the stored module, never to the registry entry itself.

mod custom;
mod hardware;
mod system;

use crate::collectors::FactProvider;
use crate::config::ModuleEntry;
use crate::template;
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};

pub type ExecuteFn = fn(&Module, &dyn FactProvider) -> String;

#[derive(Clone)]
pub struct Module {
    pub name: String,
    pub format: String,
    pub data: BTreeMap<String, Value>,
    pub execute: ExecuteFn,
}

impl Module {
    pub fn new(name: &str, format: &str, execute: ExecuteFn) -> Module {
        Module {
            name: name.to_string(),
            format: format.to_string(),
            data: BTreeMap::new(),
            execute,
        }
    }

    /// Look up a data key. Returns `(default, false)` when the key is absent
    /// or its value's shape differs from the default's shape, so a config
    /// file supplying the wrong type can never reach a module.
    pub fn get_data(&self, key: &str, default: &Value) -> (Value, bool) {
        match self.data.get(key) {
            Some(value) if value.same_shape(default) => (value.clone(), true),
            _ => (default.clone(), false),
        }
    }

    /// Integer list helper for keys like `hidden_cpus`. Non-integer elements
    /// are dropped.
    pub fn data_integers(&self, key: &str) -> Vec<i64> {
        let (value, _) = self.get_data(key, &Value::List(Vec::new()));
        value
            .as_list()
            .unwrap_or(&[])
            .iter()
            .filter_map(Value::as_integer)
            .collect()
    }

    /// String list helper for keys like `hidden_partitions`.
    pub fn data_strings(&self, key: &str) -> Vec<String> {
        let (value, _) = self.get_data(key, &Value::List(Vec::new()));
        value
            .as_list()
            .unwrap_or(&[])
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    /// Expand this module's format against a fact resolver. Decimal names
    /// are color slots and stay untouched for the later color pass; unknown
    /// fact names expand to empty.
    pub(crate) fn expand_format<F>(&self, resolve: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        template::expand(&self.format, |name| {
            if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Some(resolve(name).unwrap_or_default())
        })
    }

    /// Copy of this module with the entry's format/data overrides applied.
    pub fn with_overrides(&self, entry: &ModuleEntry) -> Module {
        let mut module = self.clone();
        if let Some(format) = &entry.format {
            module.format = format.clone();
        }
        if let Some(data) = &entry.data {
            module.data = data.clone();
        }
        module
    }
}

#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Module>,
}

impl ModuleRegistry {
    pub fn new() -> ModuleRegistry {
        ModuleRegistry::default()
    }

    /// Insert `module` unless its name is already taken. The first
    /// registration wins; duplicates are rejected without side effect.
    pub fn register(&mut self, module: Module) -> bool {
        if self.modules.contains_key(&module.name) {
            return false;
        }
        self.modules.insert(module.name.clone(), module);
        true
    }

    pub fn lookup(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Registry with the complete built-in module catalog.
    pub fn builtin() -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        system::register(&mut registry);
        hardware::register(&mut registry);
        custom::register(&mut registry);
        registry
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeFacts;
    use super::*;

    fn noop(_: &Module, _: &dyn FactProvider) -> String {
        String::new()
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ModuleRegistry::new();
        assert!(registry.register(Module::new("hostname", "first", noop)));
        assert!(!registry.register(Module::new("hostname", "second", noop)));
        assert_eq!(registry.len(), 1);
        // The first registration is untouched.
        assert_eq!(registry.lookup("hostname").unwrap().format, "first");
    }

    #[test]
    fn builtin_catalog_is_complete() {
        let registry = ModuleRegistry::builtin();
        for name in [
            "distribution",
            "hostname",
            "kernel",
            "packages",
            "shell",
            "init_system",
            "libc",
            "motherboard",
            "cpus",
            "gpus",
            "memory",
            "partitions",
            "local_ip",
            "de_wm",
            "monitors",
            "custom",
        ] {
            assert!(registry.lookup(name).is_some(), "missing module {}", name);
        }
    }

    #[test]
    fn get_data_returns_default_on_missing_key() {
        let module = Module::new("m", "", noop);
        let (value, found) = module.get_data("absent", &Value::from(7));
        assert_eq!(value, Value::from(7));
        assert!(!found);
    }

    #[test]
    fn get_data_returns_default_on_shape_mismatch() {
        let mut module = Module::new("m", "", noop);
        module
            .data
            .insert("commands".to_string(), Value::from("not a list"));
        let (value, found) = module.get_data("commands", &Value::List(Vec::new()));
        assert_eq!(value, Value::List(Vec::new()));
        assert!(!found);

        module.data.insert("shell".to_string(), Value::from(9));
        let (value, found) = module.get_data("shell", &Value::from("/bin/sh"));
        assert_eq!(value, Value::from("/bin/sh"));
        assert!(!found);
    }

    #[test]
    fn get_data_returns_stored_value_on_shape_match() {
        let mut module = Module::new("m", "", noop);
        module.data.insert("shell".to_string(), Value::from("/bin/bash"));
        let (value, found) = module.get_data("shell", &Value::from("/bin/sh"));
        assert_eq!(value, Value::from("/bin/bash"));
        assert!(found);
    }

    #[test]
    fn overrides_apply_to_a_copy() {
        let registry = ModuleRegistry::builtin();
        let entry = ModuleEntry {
            name: "hostname".to_string(),
            format: Some("$HOSTNAME".to_string()),
            data: None,
        };
        let stored = registry.lookup("hostname").unwrap();
        let copy = stored.with_overrides(&entry);
        assert_eq!(copy.format, "$HOSTNAME");
        assert_ne!(registry.lookup("hostname").unwrap().format, "$HOSTNAME");
    }

    #[test]
    fn expand_format_preserves_color_slots() {
        let mut module = Module::new("m", "${3}Key: ${4}$VALUE", noop);
        module.format = "${3}Key: ${4}$VALUE and $MISSING".to_string();
        let out = module.expand_format(|name| match name {
            "VALUE" => Some("v".to_string()),
            _ => None,
        });
        assert_eq!(out, "${3}Key: ${4}v and ");
    }

    #[test]
    fn hostname_module_renders_fact() {
        let registry = ModuleRegistry::builtin();
        let module = registry.lookup("hostname").unwrap();
        let facts = FakeFacts {
            hostname: "box".to_string(),
            ..FakeFacts::default()
        };
        let out = (module.execute)(module, &facts);
        assert_eq!(out, "${3}Hostname: ${4}box");
    }
}
