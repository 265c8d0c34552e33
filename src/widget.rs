//! Thread widget: construction, entry points, and lifecycle.
//!
//! One widget is bound to one thread for its whole life. Raw host
//! events and store notifications enter here, get routed into
//! [`Message`]s, and flow through `update::update`; the widget is
//! disposed when its thread is deleted or the editor view is torn down.

use tracing::debug;

use crate::command::CommandRegistry;
use crate::config::WidgetConfig;
use crate::context::{ContextKeySet, ContextKeyValue, COMMENT_IS_EMPTY};
use crate::glyph::GlyphMarker;
use crate::host::{EditorHost, MouseDownEvent};
use crate::input;
use crate::menu::Menu;
use crate::message::Message;
use crate::model::{CollapsibleState, CommentThread, DraftEditor};
use crate::overlay::OverlayHost;
use crate::service::CommentService;
use crate::update;
use crate::view::{self, Element};

pub struct ThreadWidget<H, S, C> {
    pub(crate) host: H,
    pub(crate) service: S,
    pub(crate) commands: C,
    pub(crate) thread: CommentThread,
    pub(crate) menu: Menu,
    pub(crate) config: WidgetConfig,
    pub(crate) context: ContextKeySet,
    pub(crate) draft: DraftEditor,
    pub(crate) glyph: GlyphMarker,
    pub(crate) overlay: OverlayHost,
    pub(crate) is_expanded: bool,
    pub(crate) disposed: bool,
}

impl<H, S, C> ThreadWidget<H, S, C>
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    /// Bind a widget to a thread.
    ///
    /// Declares every context key the menu's predicates reference and
    /// seeds `commentIsEmpty` to true. A thread arriving already
    /// expanded is displayed immediately.
    pub fn new(
        host: H,
        service: S,
        commands: C,
        thread: CommentThread,
        menu: Menu,
        config: WidgetConfig,
    ) -> Self {
        let mut context = ContextKeySet::new();
        for key in menu.referenced_keys() {
            context.declare(&key);
        }
        context.set_bool(COMMENT_IS_EMPTY, true);

        let initial_state = thread.collapsible_state;
        let mut widget = Self {
            host,
            service,
            commands,
            thread,
            menu,
            config,
            context,
            draft: DraftEditor::new(),
            glyph: GlyphMarker::new(),
            overlay: OverlayHost::new(),
            is_expanded: false,
            disposed: false,
        };
        debug!(thread = %widget.thread.thread_id, "widget bound");
        if initial_state == Some(CollapsibleState::Expanded) {
            update::update(&mut widget, Message::CollapsibleStateChanged(initial_state));
        }
        widget
    }

    /// Classify a raw editor mouse-down and apply the resulting
    /// transition. Events outside this thread's hit zone are no-ops.
    pub fn handle_mouse_down(&mut self, event: &MouseDownEvent) {
        let msg = input::route_mouse_down(
            self.anchor_line(),
            self.thread.is_collapsed(),
            self.config.hit_zone_px(),
            event,
        );
        update::update(self, msg);
    }

    /// Apply any message directly (button clicks, draft keystrokes).
    pub fn handle_message(&mut self, msg: Message) {
        update::update(self, msg);
    }

    /// Store notification: the thread's collapsible state changed.
    pub fn collapsible_state_changed(&mut self, state: Option<CollapsibleState>) {
        update::update(self, Message::CollapsibleStateChanged(state));
    }

    /// Store notification: the thread's data changed.
    pub fn thread_updated(&mut self, thread: CommentThread) {
        update::update(self, Message::ThreadUpdated(thread));
    }

    /// Externally-owned context key changed value.
    pub fn set_context_key(&mut self, key: &str, value: ContextKeyValue) {
        update::update(
            self,
            Message::ContextKeyChanged {
                key: key.to_string(),
                value,
            },
        );
    }

    /// Expand at the given line. No-op while the store says the thread
    /// is collapsed (last externally-observed state wins).
    pub fn expand(&mut self, line: u32) {
        if self.disposed {
            return;
        }
        update::expand(self, line);
    }

    /// Collapse; deletes the thread when it holds no comments.
    pub fn collapse(&mut self) {
        update::update(self, Message::Collapse);
    }

    /// Release the glyph and the zone. Idempotent; callable from any
    /// state.
    pub fn dispose(&mut self) {
        update::dispose(self);
    }

    /// Derive the current render tree without touching the host.
    #[must_use]
    pub fn render(&self) -> Element {
        view::view(
            &self.thread,
            &self.draft,
            &self.context,
            &self.menu,
            &self.commands,
        )
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.thread.owner
    }

    #[must_use]
    pub const fn thread(&self) -> &CommentThread {
        &self.thread
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub const fn glyph_position(&self) -> Option<u32> {
        self.glyph.position()
    }

    #[must_use]
    pub fn draft_text(&self) -> String {
        self.draft.text()
    }

    #[must_use]
    pub const fn context(&self) -> &ContextKeySet {
        &self.context
    }

    /// The line this widget answers gutter clicks for: the glyph while
    /// placed, the thread's start line otherwise.
    pub(crate) fn anchor_line(&self) -> u32 {
        self.glyph
            .position()
            .unwrap_or(self.thread.range.start_line)
    }
}
