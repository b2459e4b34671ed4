//! The custom module: user-supplied shell commands exposed as `CMD_<n>`
//! placeholders.

use super::{Module, ModuleRegistry};
use crate::collectors::FactProvider;
use crate::value::Value;
use std::collections::HashMap;

pub(super) fn register(registry: &mut ModuleRegistry) {
    // No default format: the module renders nothing until configured.
    registry.register(Module::new("custom", "", custom));
}

fn custom(module: &Module, facts: &dyn FactProvider) -> String {
    let (shell, _) = module.get_data("shell", &Value::from("/bin/sh"));
    let shell = shell.as_str().unwrap_or("/bin/sh").to_string();
    let (commands, _) = module.get_data("commands", &Value::List(Vec::new()));

    // Run every command; a failing command contributes an empty string but
    // never aborts the module.
    let mut outputs: HashMap<usize, String> = HashMap::new();
    if let Some(commands) = commands.as_list() {
        for (position, value) in commands.iter().enumerate() {
            let Some(command) = value.as_str() else {
                continue;
            };
            outputs.insert(position + 1, facts.run_command(command, &shell));
        }
    }

    module.expand_format(|name| {
        let output = name
            .strip_prefix("CMD_")
            .and_then(|index| index.parse::<usize>().ok())
            .and_then(|index| outputs.get(&index).cloned())
            .unwrap_or_default();
        Some(output)
    })
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeFacts;
    use super::super::ModuleRegistry;
    use crate::config::ModuleEntry;
    use crate::value::Value;
    use std::collections::BTreeMap;

    fn configured(format: &str, commands: Vec<Value>) -> ModuleEntry {
        let mut data = BTreeMap::new();
        data.insert("commands".to_string(), Value::List(commands));
        ModuleEntry {
            name: "custom".to_string(),
            format: Some(format.to_string()),
            data: Some(data),
        }
    }

    #[test]
    fn renders_command_output_by_position() {
        let registry = ModuleRegistry::builtin();
        let entry = configured(
            "$CMD_1 / $CMD_2",
            vec![Value::from("echo hi"), Value::from("echo there")],
        );
        let module = registry.lookup("custom").unwrap().with_overrides(&entry);

        let mut facts = FakeFacts::default();
        facts.commands.insert("echo hi".to_string(), "hi".to_string());
        facts
            .commands
            .insert("echo there".to_string(), "there".to_string());

        assert_eq!((module.execute)(&module, &facts), "hi / there");
    }

    #[test]
    fn out_of_range_and_malformed_indices_expand_to_empty() {
        let registry = ModuleRegistry::builtin();
        let entry = configured("<$CMD_9><$CMD_x><$CMD_>", vec![Value::from("echo hi")]);
        let module = registry.lookup("custom").unwrap().with_overrides(&entry);

        let mut facts = FakeFacts::default();
        facts.commands.insert("echo hi".to_string(), "hi".to_string());

        assert_eq!((module.execute)(&module, &facts), "<><><>");
    }

    #[test]
    fn non_string_commands_are_skipped() {
        let registry = ModuleRegistry::builtin();
        let entry = configured(
            "[$CMD_1][$CMD_2]",
            vec![Value::from(42), Value::from("echo hi")],
        );
        let module = registry.lookup("custom").unwrap().with_overrides(&entry);

        let mut facts = FakeFacts::default();
        facts.commands.insert("echo hi".to_string(), "hi".to_string());

        // Position 1 holds the non-string entry, so only CMD_2 resolves.
        assert_eq!((module.execute)(&module, &facts), "[][hi]");
    }

    #[test]
    fn unconfigured_custom_module_renders_nothing() {
        let registry = ModuleRegistry::builtin();
        let module = registry.lookup("custom").unwrap();
        assert_eq!((module.execute)(module, &FakeFacts::default()), "");
    }
}
