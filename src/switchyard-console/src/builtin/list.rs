//! The `list` command: grouped, filtered view of the live world.

use std::collections::BTreeMap;
use std::sync::Arc;

use switchyard_features::WorldSource;

use crate::command::Command;
use crate::pattern::{OPTIONAL_ARGUMENT, PatternError};

/// Build the `list( <filter>)?` command.
///
/// Groups the world snapshot by display name, filters group names by
/// case-insensitive substring, and prints groups in descending
/// lexicographic order followed by a separator and a total. Read-only.
pub(crate) fn list_command(world: Arc<dyn WorldSource>) -> Result<Command, PatternError> {
    Command::new(
        "list",
        &format!("list( {OPTIONAL_ARGUMENT})?"),
        move |args, out| {
            let search = args.value().unwrap_or("").to_lowercase();

            // Count per display name; the first item seen for a group
            // supplies its annotation.
            let mut groups: BTreeMap<String, (usize, Option<String>)> = BTreeMap::new();
            for item in world.items() {
                let entry = groups
                    .entry(item.name)
                    .or_insert_with(|| (0, item.label));
                entry.0 += 1;
            }

            let mut total = 0;
            for (name, (count, label)) in groups.iter().rev() {
                if !name.to_lowercase().contains(&search) {
                    continue;
                }

                let extra = label
                    .as_deref()
                    .filter(|l| !l.is_empty())
                    .map(|l| format!(" ({l})"))
                    .unwrap_or_default();
                out.line(&format!("{name} [{count}]{extra}"), "list");
                total += count;
            }

            out.line("------", "list");
            out.line(&format!("found {total} items"), "list");
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandRegistry;
    use crate::sink::MemorySink;
    use pretty_assertions::assert_eq;
    use switchyard_features::WorldItem;

    struct FixedWorld(Vec<WorldItem>);

    impl WorldSource for FixedWorld {
        fn items(&self) -> Vec<WorldItem> {
            self.0.clone()
        }
    }

    fn commands(items: Vec<WorldItem>) -> CommandRegistry {
        let mut commands = CommandRegistry::new();
        commands.register(list_command(Arc::new(FixedWorld(items))).unwrap());
        commands
    }

    fn ammo_and_bread() -> Vec<WorldItem> {
        vec![
            WorldItem::new("Ammo 5.45"),
            WorldItem::new("Bread"),
            WorldItem::new("Ammo 5.45"),
            WorldItem::new("Ammo 5.45"),
        ]
    }

    #[test]
    fn test_filter_keeps_matching_groups_only() {
        let commands = commands(ammo_and_bread());
        let mut sink = MemorySink::new();
        commands.dispatch("list ammo", &mut sink);

        assert_eq!(
            sink.texts(),
            vec!["Ammo 5.45 [3]", "------", "found 3 items"]
        );
    }

    #[test]
    fn test_unfiltered_list_sorts_descending() {
        let commands = commands(ammo_and_bread());
        let mut sink = MemorySink::new();
        commands.dispatch("list", &mut sink);

        assert_eq!(
            sink.texts(),
            vec!["Bread [1]", "Ammo 5.45 [3]", "------", "found 4 items"]
        );
    }

    #[test]
    fn test_annotation_prints_when_meaningfully_set() {
        let commands = commands(vec![
            WorldItem::with_label("Keycard", "Rare"),
            WorldItem::with_label("Matches", ""),
        ]);
        let mut sink = MemorySink::new();
        commands.dispatch("list", &mut sink);

        assert_eq!(
            sink.texts(),
            vec!["Matches [1]", "Keycard [1] (Rare)", "------", "found 2 items"]
        );
    }

    #[test]
    fn test_trailing_space_means_no_filter() {
        let commands = commands(vec![WorldItem::new("Bread")]);
        let mut sink = MemorySink::new();
        commands.dispatch("list ", &mut sink);

        assert_eq!(sink.texts(), vec!["Bread [1]", "------", "found 1 items"]);
    }

    #[test]
    fn test_empty_world() {
        let commands = commands(vec![]);
        let mut sink = MemorySink::new();
        commands.dispatch("list", &mut sink);

        assert_eq!(sink.texts(), vec!["------", "found 0 items"]);
    }
}
