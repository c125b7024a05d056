use crate::core::targets::ElementId;
use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Power2Out,
    Power3,
    SineInOut,
    BackOut,
}

impl Ease {
    pub fn as_str(self) -> &'static str {
        match self {
            Ease::Power2Out => "power2.out",
            Ease::Power3 => "power3",
            Ease::SineInOut => "sine.inOut",
            Ease::BackOut => "back.out(1.7)",
        }
    }
}

impl Serialize for Ease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTriggerSpec {
    pub trigger: ElementId,
    pub start: &'static str,
}

/// Tween properties, serialized as the engine's camelCase vars object.
///
/// `scroll_trigger` holds an element handle and is attached by the sink.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_perspective: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yoyo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<&'static str>,
    #[serde(skip)]
    pub scroll_trigger: Option<ScrollTriggerSpec>,
}

impl TweenVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn over(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }

    pub fn x(mut self, v: f64) -> Self {
        self.x = Some(v);
        self
    }
    pub fn y(mut self, v: f64) -> Self {
        self.y = Some(v);
        self
    }
    pub fn xy(self, x: f64, y: f64) -> Self {
        self.x(x).y(y)
    }
    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }
    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }
    pub fn rotation(mut self, rotation_x: f64, rotation_y: f64) -> Self {
        self.rotation_x = Some(rotation_x);
        self.rotation_y = Some(rotation_y);
        self
    }
    pub fn perspective(mut self, v: f64) -> Self {
        self.transform_perspective = Some(v);
        self
    }
    pub fn background(mut self, color: &'static str) -> Self {
        self.background_color = Some(color);
        self
    }
    pub fn delay(mut self, v: f64) -> Self {
        self.delay = Some(v);
        self
    }
    pub fn stagger(mut self, v: f64) -> Self {
        self.stagger = Some(v);
        self
    }
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }
    /// `-1` repeats forever.
    pub fn repeat(mut self, count: i32) -> Self {
        self.repeat = Some(count);
        self
    }
    pub fn yoyo(mut self) -> Self {
        self.yoyo = Some(true);
        self
    }
    pub fn overwrite_auto(mut self) -> Self {
        self.overwrite = Some("auto");
        self
    }
    pub fn scroll_trigger(mut self, trigger: ElementId, start: &'static str) -> Self {
        self.scroll_trigger = Some(ScrollTriggerSpec { trigger, start });
        self
    }
}

/// Receiver of tween requests. The web layer forwards them to the engine.
///
/// Callers never pass an empty target list.
pub trait TweenSink {
    fn to(&mut self, targets: &[ElementId], vars: &TweenVars);
    fn from(&mut self, targets: &[ElementId], vars: &TweenVars);
    fn from_to(&mut self, targets: &[ElementId], from: &TweenVars, to: &TweenVars);
    fn scroll_to(&mut self, y: f64, vars: &TweenVars);
}
