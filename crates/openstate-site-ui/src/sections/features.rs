//! Feature highlights.

use openstate_site_core::{ContentItem, IconTag};

use super::{CardSection, SectionId};

/// "What you need, and nothing more" cards.
pub fn features() -> CardSection {
    CardSection::new(
        SectionId::Features,
        "What you need, and nothing more",
        vec![
            ContentItem::new(
                IconTag::Red,
                "Language Agnostic",
                "Define workflows on your own terms. Callbacks as containers means the sky's the limit for libraries and languages.",
            ),
            ContentItem::new(
                IconTag::Purple,
                "Low Code",
                "Don't overthink workflows with serialized, declarative configurations. Creating tasks is as easy as writing a YAML file.",
            ),
            ContentItem::new(
                IconTag::Yellow,
                "Pluggable Runtimes",
                "OpenState can deploy into any runtime environment, including your existing Kubernetes cluster.",
            ),
            ContentItem::new(
                IconTag::Green,
                "HA and Fault Tolerant",
                "Built on top of Raft and backed by the Serf gossip protocol, OpenState puts fault tolerance and strong consistency.",
            ),
        ],
    )
}
