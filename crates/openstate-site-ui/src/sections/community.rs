//! Community channels.

use openstate_site_core::{ContentItem, IconTag};

use super::{CardSection, SectionId};

/// "Community Resources" cards.
pub fn community() -> CardSection {
    CardSection::new(
        SectionId::Community,
        "Community Resources",
        vec![
            ContentItem::new(
                IconTag::Green,
                "Slack",
                "Low-priority, high volume communications. Come and ask questions!",
            ),
            ContentItem::new(
                IconTag::Purple,
                "Email List",
                "High-priority, low volume annoucements. Includes release information, security notices, and urgent bulletins.",
            ),
            ContentItem::new(
                IconTag::Blue,
                "Bug Tracker",
                "Use GitHub's Issue Tracker. Please only use this for reporting bugs. Do not ask for general help here; use the Slack workspace instead.",
            ),
        ],
    )
}
