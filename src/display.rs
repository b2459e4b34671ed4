//! The render pipeline: run the configured modules in order, apply color
//! substitution and merge everything with the ascii art.

use crate::art;
use crate::collectors::FactProvider;
use crate::color::{self, ColorMap};
use crate::compose::compose;
use crate::config::Config;
use crate::error::Result;
use crate::modules::ModuleRegistry;
use std::time::Instant;

/// Produce the final output block. Fails only on startup-class problems
/// (a malformed art color header); everything inside module execution
/// degrades to empty text instead of aborting the run.
pub fn render(
    config: &Config,
    registry: &ModuleRegistry,
    facts: &dyn FactProvider,
    timing: bool,
) -> Result<String> {
    let art = art::load_art(config, &facts.distro().id);
    let (header, body) = color::split_color_header(&art);
    let colors = ColorMap::build(header, &config.ansii_colors, config.force_config_ansii)?;

    let ascii = colors.apply(body);
    let ascii_lines: Vec<String> = ascii.lines().map(str::to_string).collect();

    let mut content_lines: Vec<String> = Vec::new();
    for entry in &config.modules {
        // Entries naming unknown modules are skipped.
        let Some(module) = registry.lookup(&entry.name) else {
            continue;
        };
        let module = module.with_overrides(entry);

        let start = Instant::now();
        let text = (module.execute)(&module, facts);
        if timing {
            println!(
                "Module '{}' took {} ms",
                module.name,
                start.elapsed().as_millis()
            );
        }

        let text = colors.apply(&text);
        if text.is_empty() {
            continue;
        }
        for line in text.trim_end_matches('\n').lines() {
            content_lines.push(line.to_string());
        }
    }

    Ok(compose(&ascii_lines, &content_lines))
}
