//! review-zone - inline review-thread overlay for line-anchored editors
//!
//! Elm-shaped widget core (Model/Message/Update/View) behind editor-host
//! traits: the embedder supplies the editor, command registry, and
//! comment store; the widget owns the presentation state machine,
//! gutter input routing, overlay geometry, and the action menu.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

pub mod command;
pub mod config;
pub mod context;
pub mod glyph;
pub mod host;
pub mod input;
pub mod layout;
pub mod menu;
pub mod message;
pub mod model;
pub mod overlay;
pub mod service;
pub mod update;
pub mod view;
pub mod widget;

pub use command::{CommandArgs, CommandRegistry};
pub use config::WidgetConfig;
pub use context::{ContextKeyExpr, ContextKeySet, ContextKeyValue, COMMENT_IS_EMPTY};
pub use host::{EditorHost, FocusTarget, MouseButton, MouseDownEvent, MouseTargetKind};
pub use menu::{ActionNode, Menu, MenuNode};
pub use message::Message;
pub use model::{CollapsibleState, Comment, CommentThread, DraftEditor, ThreadRange};
pub use service::CommentService;
pub use update::update;
pub use view::{view, ButtonAction, Element};
pub use widget::ThreadWidget;
