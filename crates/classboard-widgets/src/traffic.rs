//! Traffic light

use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Light {
    Red,
    Yellow,
    Green,
    #[default]
    None,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficLight {
    pub active: Light,
}

impl ContentModel for TrafficLight {
    const KIND: WidgetKind = WidgetKind::TrafficLight;
}

impl TrafficLight {
    /// Light `light`, or switch it off if it is already lit
    pub fn toggle(&mut self, light: Light) -> Payload {
        self.active = if self.active == light { Light::None } else { light };
        self.patch(&["active"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut traffic = TrafficLight::default();
        let patch = traffic.toggle(Light::Red);
        assert_eq!(patch.get("active").unwrap(), "red");

        traffic.toggle(Light::Green);
        assert_eq!(traffic.active, Light::Green);

        let patch = traffic.toggle(Light::Green);
        assert_eq!(patch.get("active").unwrap(), "none");
    }

    #[test]
    fn test_reads_saved() {
        let traffic = TrafficLight::from_payload(&Payload::new().with("active", "yellow"));
        assert_eq!(traffic.active, Light::Yellow);
    }
}
