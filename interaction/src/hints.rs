//! Contextual hint line for the crosshair, returned as plain text.

use {
    bar_components::InteractableKind,
    cocktail_resources::ContainerState,
    liquor_assets::LiquorCatalog,
};

/// What the hint needs to know about one object.
#[derive(Debug, Clone, Copy)]
pub struct HintSubject<'a> {
    pub kind: InteractableKind,
    /// Ingredient id, bottles only
    pub liquor: Option<&'a str>,
    /// Overrides the catalog name for ingredient bottles
    pub display_name: Option<&'a str>,
    /// Glasses and shakers
    pub contents: Option<&'a ContainerState>,
}

impl<'a> HintSubject<'a> {
    pub fn new(kind: InteractableKind) -> Self {
        Self {
            kind,
            liquor: None,
            display_name: None,
            contents: None,
        }
    }
}

/// Held object wins over the target. Empty when neither exists.
pub fn interaction_hint(
    held: Option<HintSubject>,
    targeted: Option<(HintSubject, f32)>,
    catalog: &LiquorCatalog,
) -> String {
    if let Some(held) = held {
        return held_hint(&held, catalog);
    }
    if let Some((target, distance)) = targeted {
        return targeted_hint(&target, distance, catalog);
    }
    String::new()
}

pub fn held_hint(subject: &HintSubject, catalog: &LiquorCatalog) -> String {
    let label = subject.kind.label();
    match subject.kind {
        InteractableKind::Bottle => {
            let item = match subject.liquor.and_then(|id| catalog.get(id)) {
                Some(entry) => format!("{label} ({})", entry.name),
                None => label.to_string(),
            };
            format!("{item} | Hold LMB to pour | R to return to the shelf")
        }
        InteractableKind::Glass => format!("{label} | RMB to drink | R to put back"),
        InteractableKind::Shaker => format!("{label} | Hold LMB to shake | R to put back"),
        InteractableKind::Jigger => format!("{label} | For measuring pours | R to put back"),
        InteractableKind::Guitar => format!("{label} | R to put back"),
    }
}

pub fn targeted_hint(subject: &HintSubject, distance: f32, catalog: &LiquorCatalog) -> String {
    let mut item = subject.kind.label().to_string();
    let mut extra = String::new();

    match subject.kind {
        InteractableKind::Guitar => {
            return format!("E to play {item} ({distance:.1}m)");
        }
        InteractableKind::Bottle => {
            if let Some(entry) = subject.liquor.and_then(|id| catalog.get(id)) {
                item = entry.name.clone();
                if entry.display_name != entry.name {
                    extra = format!(" ({})", entry.display_name);
                }
            }
            if let Some(name) = subject.display_name {
                item = name.to_string();
            }
        }
        InteractableKind::Glass | InteractableKind::Shaker => {
            extra = match subject.contents.filter(|contents| !contents.is_empty()) {
                Some(contents) => {
                    let names: Vec<&str> = contents
                        .ingredients()
                        .iter()
                        .map(|ingredient| {
                            catalog
                                .get(&ingredient.kind)
                                .map_or(ingredient.kind.as_str(), |entry| entry.name.as_str())
                        })
                        .collect();
                    format!(" [{}, {:.0}ml]", names.join("+"), contents.volume())
                }
                None => " [empty]".to_string(),
            };
        }
        InteractableKind::Jigger => {}
    }

    format!("E to pick up {item}{extra} ({distance:.1}m)")
}
