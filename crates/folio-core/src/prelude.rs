pub use crate::animation::*;
pub use crate::color::{Brush, Color, LinearGradient};
pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::error::SpecError;
pub use crate::geometry::{Rect, Size, Transform, Vec2};
pub use crate::locals::{Theme, intersections, theme, with_intersections, with_theme};
pub use crate::modifier::Modifier;
pub use crate::reveal::{RevealSpec, RevealState, VisualState};
pub use crate::runtime::{
    ComposeGuard, Frame, LinkRegion, Scheduler, ScrollHandle, remember, remember_state,
    remember_state_with_key, remember_with_key,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::signal::{Signal, signal};
pub use crate::view::{Scene, SceneNode, View, ViewId, ViewKind};
pub use crate::watch::{Intersections, Watch, WatchKey};
pub use taffy::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
