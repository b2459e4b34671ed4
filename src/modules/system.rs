//! Built-in modules for system identity facts.

use super::{Module, ModuleRegistry};
use crate::collectors::FactProvider;

pub(super) fn register(registry: &mut ModuleRegistry) {
    registry.register(Module::new(
        "distribution",
        "${3}Distribution: ${4}$DISTRO_SHORT ($ARCH)",
        distribution,
    ));
    registry.register(Module::new("hostname", "${3}Hostname: ${4}$HOSTNAME", hostname));
    registry.register(Module::new(
        "kernel",
        "${3}Kernel: ${4}$KERNEL_NAME $KERNEL_RELEASE",
        kernel,
    ));
    registry.register(Module::new("packages", "${3}Packages: ${4}$PACKAGES", packages));
    registry.register(Module::new("shell", "${3}Shell: ${4}$SHELL", shell));
    registry.register(Module::new("init_system", "${3}Init: ${4}$INIT", init_system));
    registry.register(Module::new("libc", "${3}Libc: ${4}$LIBC", libc));
    registry.register(Module::new("local_ip", "${3}Local IP: ${4}$LOCAL_IP", local_ip));
    registry.register(Module::new(
        "de_wm",
        "${3}${DEWM_TYPE}: ${4}${DEWM_NAME} ${DEWM_VERSION} ($DISPLAY_PROTOCOL)",
        de_wm,
    ));
}

fn distribution(module: &Module, facts: &dyn FactProvider) -> String {
    let distro = facts.distro();
    module.expand_format(|name| match name {
        "DISTRO_ID" => Some(distro.id.clone()),
        "DISTRO_SHORT" => Some(distro.short_name.clone()),
        "DISTRO_LONG" => Some(distro.long_name.clone()),
        "ARCH" => Some(facts.arch()),
        _ => None,
    })
}

fn hostname(module: &Module, facts: &dyn FactProvider) -> String {
    let hostname = facts.hostname();
    module.expand_format(|name| match name {
        "HOSTNAME" => Some(hostname.clone()),
        _ => None,
    })
}

fn kernel(module: &Module, facts: &dyn FactProvider) -> String {
    let (kernel_name, kernel_release) = facts.kernel();
    module.expand_format(|name| match name {
        "KERNEL_NAME" => Some(kernel_name.clone()),
        "KERNEL_RELEASE" => Some(kernel_release.clone()),
        _ => None,
    })
}

fn packages(module: &Module, facts: &dyn FactProvider) -> String {
    module.expand_format(|name| match name {
        "PACKAGES" => Some(facts.installed_packages()),
        _ => None,
    })
}

fn shell(module: &Module, facts: &dyn FactProvider) -> String {
    module.expand_format(|name| match name {
        "SHELL" => Some(facts.user_shell()),
        _ => None,
    })
}

fn init_system(module: &Module, facts: &dyn FactProvider) -> String {
    module.expand_format(|name| match name {
        "INIT" => Some(facts.init_system()),
        _ => None,
    })
}

fn libc(module: &Module, facts: &dyn FactProvider) -> String {
    module.expand_format(|name| match name {
        "LIBC" => Some(facts.libc()),
        _ => None,
    })
}

fn local_ip(module: &Module, facts: &dyn FactProvider) -> String {
    module.expand_format(|name| match name {
        "LOCAL_IP" => Some(facts.local_ip()),
        _ => None,
    })
}

fn de_wm(module: &Module, facts: &dyn FactProvider) -> String {
    // Nothing to report from a plain TTY.
    let session = facts.session_type();
    if session.is_empty() || session == "tty" {
        return String::new();
    }

    let Some(dewm) = facts.de_wm() else {
        return String::new();
    };

    module.expand_format(|name| match name {
        "DEWM_NAME" => Some(dewm.name.clone()),
        "DEWM_TYPE" => Some(dewm.kind.clone()),
        "DEWM_VERSION" => Some(dewm.version.clone()),
        "DISPLAY_PROTOCOL" => Some(facts.display_protocol()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeFacts;
    use super::super::ModuleRegistry;
    use crate::data::DeWm;

    #[test]
    fn de_wm_is_silent_in_a_tty() {
        let registry = ModuleRegistry::builtin();
        let module = registry.lookup("de_wm").unwrap();

        let facts = FakeFacts {
            session_type: "tty".to_string(),
            de_wm: Some(DeWm {
                name: "KDE Plasma".to_string(),
                kind: "DE".to_string(),
                version: "6.0".to_string(),
            }),
            ..FakeFacts::default()
        };
        assert_eq!((module.execute)(module, &facts), "");
    }

    #[test]
    fn de_wm_renders_kind_and_protocol() {
        let registry = ModuleRegistry::builtin();
        let module = registry.lookup("de_wm").unwrap();

        let facts = FakeFacts {
            session_type: "wayland".to_string(),
            de_wm: Some(DeWm {
                name: "Sway".to_string(),
                kind: "WM".to_string(),
                version: "1.9".to_string(),
            }),
            ..FakeFacts::default()
        };
        assert_eq!(
            (module.execute)(module, &facts),
            "${3}WM: ${4}Sway 1.9 (Wayland)"
        );
    }
}
