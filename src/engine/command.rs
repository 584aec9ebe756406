//! The engine's complete interactive vocabulary.
//!
//! Layout buttons, item clicks and out-of-band repaint requests (window
//! resize, camera drag) all arrive as a [`FieldCommand`] passed to
//! [`FieldEngine::execute`](super::FieldEngine::execute).

use std::str::FromStr;

use crate::layout::{Layout, UnknownLayout};
use crate::store::ItemDescriptor;

/// A discrete operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCommand {
    /// Morph every item into a layout (a layout button).
    ShowLayout(Layout),
    /// Settle into the table and fly one item to the focus point (a click on
    /// that item).
    FocusItem(ItemDescriptor),
    /// Repaint once without changing anything (resize, camera movement).
    Render,
}

impl From<Layout> for FieldCommand {
    fn from(layout: Layout) -> Self {
        Self::ShowLayout(layout)
    }
}

impl From<ItemDescriptor> for FieldCommand {
    fn from(item: ItemDescriptor) -> Self {
        Self::FocusItem(item)
    }
}

impl FromStr for FieldCommand {
    type Err = UnknownLayout;

    /// Parse a button name: one of the four layout names, or `"render"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("render") {
            return Ok(Self::Render);
        }
        s.parse::<Layout>().map(Self::ShowLayout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_names_map_to_layouts() {
        assert_eq!(
            "sphere".parse::<FieldCommand>(),
            Ok(FieldCommand::ShowLayout(Layout::Sphere))
        );
        assert_eq!("render".parse::<FieldCommand>(), Ok(FieldCommand::Render));
        assert!("zoom".parse::<FieldCommand>().is_err());
    }

    #[test]
    fn descriptor_becomes_focus_command() {
        let cmd: FieldCommand = ItemDescriptor::new(7).into();
        assert_eq!(cmd, FieldCommand::FocusItem(ItemDescriptor::new(7)));
    }
}
