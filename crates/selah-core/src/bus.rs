//! Preset bus
//!
//! Decouples the setlist screen from the pad screen: a publisher hands a
//! chosen `SetlistItem` to the bus, the pad screen drains the receiving
//! end through its subscription. Neither side holds a reference to the
//! other. The channel is typed, so a wrong-payload delivery cannot occur;
//! a delivery with no listener is dropped silently.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::setlist::SetlistItem;

/// Sending half of the preset bus
///
/// Cheap to clone; any screen that can choose a preset holds one.
#[derive(Clone)]
pub struct PresetPublisher {
    tx: Sender<SetlistItem>,
}

impl PresetPublisher {
    /// Publish a chosen preset to whoever is listening
    ///
    /// Never fails: with no subscriber the preset is simply dropped.
    pub fn publish(&self, item: SetlistItem) {
        log::debug!("Preset bus: publishing '{}'", item.name);
        if self.tx.send(item).is_err() {
            log::debug!("Preset bus: no subscriber, preset dropped");
        }
    }
}

/// Create a preset bus
///
/// Returns the publisher and the receiving end the pad screen polls via
/// its subscription.
pub fn preset_channel() -> (PresetPublisher, Receiver<SetlistItem>) {
    let (tx, rx) = channel();
    (PresetPublisher { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Tone;
    use crate::types::PadStyle;

    fn item(name: &str) -> SetlistItem {
        SetlistItem {
            name: name.to_string(),
            tone: Tone::C,
            pad_style: PadStyle::Base,
            low_cut_hz: 310.0,
            high_cut_hz: 4500.0,
        }
    }

    #[test]
    fn test_publish_and_receive() {
        let (publisher, rx) = preset_channel();
        publisher.publish(item("Opening"));

        let received = rx.try_recv().unwrap();
        assert_eq!(received.name, "Opening");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_publishers_are_independent_clones() {
        let (publisher, rx) = preset_channel();
        let second = publisher.clone();

        publisher.publish(item("A"));
        second.publish(item("B"));

        assert_eq!(rx.try_recv().unwrap().name, "A");
        assert_eq!(rx.try_recv().unwrap().name, "B");
    }

    #[test]
    fn test_publish_without_subscriber_is_silent() {
        let (publisher, rx) = preset_channel();
        drop(rx);
        // Must not panic
        publisher.publish(item("Lost"));
    }
}
