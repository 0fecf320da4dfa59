//! Retrospective whiteboard engine.
//!
//! A free-form canvas of note cards grouped into three fixed categories
//! (stop / start / continue). The crate owns every piece of logic behind the
//! board: section geometry, non-overlapping note placement, text similarity,
//! greedy clustering, circular cluster layout, theme naming, the pan/zoom
//! viewport, and the drag state machine. Nothing here touches a rendered
//! tree or performs I/O; the host measures the canvas, feeds pointer events
//! in, and acts on the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session orchestrator [`engine::EngineCore`] and host actions |
//! | [`doc`] | Note / category types, the note store, and save snapshots |
//! | [`geometry`] | Points, sizes, rectangles, containment and overlap |
//! | [`viewport`] | Zoom/pan state and screen-to-canvas conversion |
//! | [`section`] | The three category regions and auto-expansion |
//! | [`placement`] | Grid placement of new notes |
//! | [`similarity`] | Heuristic pairwise text similarity |
//! | [`cluster`] | Greedy threshold clustering per category |
//! | [`layout`] | Circular arrangement of cluster members |
//! | [`theme`] | Cluster labels and pastel colours |
//! | [`input`] | Pointer types and the gesture state machine |
//! | [`hit`] | Hit-testing pointer positions against notes |
//! | [`consts`] | Shared numeric constants |

pub mod cluster;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod layout;
pub mod placement;
pub mod section;
pub mod similarity;
pub mod theme;
pub mod viewport;
