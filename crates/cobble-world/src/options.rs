//! User-facing engine options as an explicit schema table.
//!
//! Name, description, and default live in one static table instead of
//! annotations reflected off config fields; the settings UI and the
//! persistence collaborator both read from here.

/// Schema entry for one engine option.
#[derive(Clone, Copy, Debug)]
pub struct OptionDescriptor {
    /// Stable option key.
    pub name: &'static str,
    /// Description shown to the user.
    pub description: &'static str,
    /// Default value, serialized.
    pub default: &'static str,
}

/// All user-facing options.
pub static OPTIONS: &[OptionDescriptor] = &[
    OptionDescriptor {
        name: "render_mode",
        description: "Primitive mode used to draw chunk meshes (triangles, lines, points)",
        default: "triangles",
    },
    OptionDescriptor {
        name: "world_seed",
        description: "Seed for procedural terrain generation",
        default: "0",
    },
    OptionDescriptor {
        name: "view_distance",
        description: "Chunk radius the streaming collaborator keeps meshed",
        default: "8",
    },
];

/// Look up an option by name.
pub fn find_option(name: &str) -> Option<&'static OptionDescriptor> {
    OPTIONS.iter().find(|option| option.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let option = find_option("render_mode").expect("render_mode present");
        assert_eq!(option.default, "triangles");
        assert!(find_option("no_such_option").is_none());
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in OPTIONS.iter().enumerate() {
            for b in &OPTIONS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
