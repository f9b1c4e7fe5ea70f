//! Headless replay of recorded board input.
//!
//! A script lists the items on the board and a sequence of screen-space
//! input events. Replaying it drives a [`Board`] exactly as a host would and
//! reports the resulting item boxes and camera matrix.
//!
//! ```json
//! {
//!   "items": [{"kind": "shape", "id": 1, "mbr": {"left": 0, "top": 0, "right": 100, "bottom": 100}}],
//!   "selection": [1],
//!   "events": [
//!     {"type": "pointerDown", "x": 100, "y": 50},
//!     {"type": "pointerUp", "x": 50, "y": 50}
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use boardkit_canvas::{
    AspectRatio, Board, BoardItem, CommentItem, FrameItem, Matrix, Mbr, Modifiers, Point,
    ShapeItem, StickerItem, TextItem,
};
use boardkit_core::{ItemId, TouchId};
use boardkit_settings::{Config, ViewStateStore};
use serde::{Deserialize, Serialize};

/// Item placed on the board before replay starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ItemSpec {
    Shape {
        id: ItemId,
        mbr: Mbr,
    },
    Sticker {
        id: ItemId,
        mbr: Mbr,
    },
    #[serde(rename_all = "camelCase")]
    Frame {
        id: ItemId,
        mbr: Mbr,
        #[serde(default)]
        aspect_ratio: Option<AspectRatio>,
        #[serde(default)]
        ratio_locked: bool,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        id: ItemId,
        x: f64,
        y: f64,
        text: String,
        #[serde(default)]
        max_width: Option<f64>,
    },
    Comment {
        id: ItemId,
        x: f64,
        y: f64,
        #[serde(default)]
        target: Option<ItemId>,
    },
}

impl ItemSpec {
    fn build(&self) -> Box<dyn BoardItem> {
        match self {
            ItemSpec::Shape { id, mbr } => Box::new(ShapeItem::new(*id, *mbr)),
            ItemSpec::Sticker { id, mbr } => Box::new(StickerItem::new(*id, *mbr)),
            ItemSpec::Frame {
                id,
                mbr,
                aspect_ratio,
                ratio_locked,
            } => Box::new(
                FrameItem::new(*id, *mbr, aspect_ratio.unwrap_or(AspectRatio::Custom))
                    .with_ratio_locked(*ratio_locked),
            ),
            ItemSpec::Text {
                id,
                x,
                y,
                text,
                max_width,
            } => {
                let item = TextItem::new(*id, Point::new(*x, *y), text.clone());
                match max_width {
                    Some(width) => Box::new(item.with_max_width(*width)),
                    None => Box::new(item),
                }
            }
            ItemSpec::Comment { id, x, y, target } => {
                Box::new(CommentItem::new(*id, Point::new(*x, *y), *target))
            }
        }
    }
}

/// One recorded input event. Positions are screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    #[serde(rename_all = "camelCase")]
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        aspect_lock: bool,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    Cancel,
    #[serde(rename_all = "camelCase")]
    Wheel {
        delta_y: f64,
        x: f64,
        y: f64,
    },
    TouchStart {
        id: TouchId,
        x: f64,
        y: f64,
    },
    TouchMove {
        id: TouchId,
        x: f64,
        y: f64,
    },
    TouchEnd {
        id: TouchId,
    },
    Select {
        ids: Vec<ItemId>,
    },
    ZoomIn,
    ZoomOut,
    ZoomToFit,
    ZoomToSelection,
}

/// Replay input file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub items: Vec<ItemSpec>,
    /// Items selected before the first event.
    pub selection: Vec<ItemId>,
    pub events: Vec<InputEvent>,
}

impl Script {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing script {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    pub id: ItemId,
    pub kind: &'static str,
    pub mbr: Mbr,
}

/// Board state after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub items: Vec<ItemReport>,
    pub selection: Vec<ItemId>,
    pub camera: Matrix,
}

impl ReplayReport {
    fn of(board: &Board) -> Self {
        Self {
            items: board
                .store()
                .iter()
                .map(|item| ItemReport {
                    id: item.id(),
                    kind: item.kind(),
                    mbr: item.mbr(),
                })
                .collect(),
            selection: board.selection().ids().to_vec(),
            camera: *board.camera().matrix(),
        }
    }
}

/// Replays `script` on a fresh board. With a store and document id, the
/// saved view of that document is restored first and every camera change is
/// written back.
pub fn run(
    script: &Script,
    config: &Config,
    persistence: Option<(Box<dyn ViewStateStore>, String)>,
) -> anyhow::Result<ReplayReport> {
    let mut board = Board::new(config);
    if let Some((store, document_id)) = persistence {
        board.camera_mut().attach_store(store, document_id);
    }

    for spec in &script.items {
        board
            .add_item(spec.build())
            .context("building the script's items")?;
    }
    board.select(script.selection.iter().copied());

    for event in &script.events {
        apply(&mut board, event);
    }
    if board.transformer().is_resizing() {
        tracing::warn!("Script ended during a resize; finishing it");
        board.cancel();
    }

    tracing::info!(
        "Replayed {} events on {} items",
        script.events.len(),
        board.store().len()
    );
    Ok(ReplayReport::of(&board))
}

fn apply(board: &mut Board, event: &InputEvent) {
    tracing::trace!("Replaying {:?}", event);
    match event {
        InputEvent::PointerDown { x, y, aspect_lock } => {
            let modifiers = Modifiers {
                aspect_lock: *aspect_lock,
            };
            let outcome = board.pointer_down(Point::new(*x, *y), modifiers);
            tracing::debug!("Pointer down at ({}, {}): {:?}", x, y, outcome);
        }
        InputEvent::PointerMove { x, y } => {
            board.pointer_move(Point::new(*x, *y));
        }
        InputEvent::PointerUp { x, y } => {
            board.pointer_up(Point::new(*x, *y));
        }
        InputEvent::Cancel => {
            board.cancel();
        }
        InputEvent::Wheel { delta_y, x, y } => board.wheel(*delta_y, Point::new(*x, *y)),
        InputEvent::TouchStart { id, x, y } => board.touch_start(*id, Point::new(*x, *y)),
        InputEvent::TouchMove { id, x, y } => {
            board.touch_move(*id, Point::new(*x, *y));
        }
        InputEvent::TouchEnd { id } => board.touch_end(*id),
        InputEvent::Select { ids } => board.select(ids.iter().copied()),
        InputEvent::ZoomIn => {
            board.camera_mut().zoom_in();
        }
        InputEvent::ZoomOut => {
            board.camera_mut().zoom_out();
        }
        InputEvent::ZoomToFit => board.zoom_to_fit(),
        InputEvent::ZoomToSelection => board.zoom_to_selection(),
    }
}
