//! DXF writer module
//!
//! [`DxfWriter`] is a streaming session over a caller-supplied sink. Each
//! operation appends a fixed sequence of group code/value pairs; nothing
//! is held in memory and nothing already written is revisited.

mod entity_writer;
mod section_writer;
mod state;
mod stream_writer;
mod text_writer;

pub use section_writer::HeaderValue;
pub use state::{Section, WriterState};
pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::{bounded_str, DxfTextWriter, MAX_STRING_LENGTH, REAL_PRECISION};

use crate::entities::EntityKind;
use crate::error::{DxfError, Result};
use crate::log;
use crate::tables::ViewportDefaults;
use crate::types::{Handle, HandleSeed};
use std::io::Write;

/// Name of the layer entities fall back to when none is chosen
pub const DEFAULT_LAYER: &str = "0";

/// Which operations a writer session offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capabilities {
    /// Sections, comments and entities only; no handles are emitted
    Minimal,
    /// Adds tables, handles and VPORT/LTYPE/LAYER records
    #[default]
    Full,
}

/// Configuration for a [`DxfWriter`] session
#[derive(Debug, Clone)]
pub struct DxfWriterConfiguration {
    /// Operation set offered by the session.
    ///
    /// Default: [`Capabilities::Full`].
    pub capabilities: Capabilities,

    /// Layer used when no layer has been set, or after the layer is reset.
    /// `None` makes emitting an entity without a layer an error.
    ///
    /// Default: `Some("0")`.
    pub default_layer: Option<String>,

    /// When `true`, operations called out of document order are rejected
    /// with [`DxfError::OutOfOrder`] before anything is written.
    ///
    /// Default: `true`.
    pub strict: bool,

    /// When `true`, TEXT records repeat the X value at group code 20 and
    /// write the height as an integer, matching older output byte for byte.
    ///
    /// Default: `false`.
    pub legacy_text: bool,

    /// Fixed fields of every VPORT record
    pub viewport: ViewportDefaults,
}

impl Default for DxfWriterConfiguration {
    fn default() -> Self {
        Self {
            capabilities: Capabilities::Full,
            default_layer: Some(DEFAULT_LAYER.to_string()),
            strict: true,
            legacy_text: false,
            viewport: ViewportDefaults::default(),
        }
    }
}

impl DxfWriterConfiguration {
    /// Configuration without tables or handles
    pub fn minimal() -> Self {
        Self {
            capabilities: Capabilities::Minimal,
            ..Self::default()
        }
    }
}

/// Streaming DXF writer session
///
/// ```
/// use minidxf::{DxfWriter, Vector2};
///
/// let mut dxf = DxfWriter::new(Vec::new());
/// dxf.entities_begin()?;
/// dxf.line(0.0, 0.0, 5.0, 0.0)?;
/// dxf.polygon(&[Vector2::new(10.0, 0.0), Vector2::new(0.0, 10.0)])?;
/// dxf.entities_end()?;
/// dxf.end()?;
///
/// let text = String::from_utf8(dxf.into_inner()).unwrap();
/// assert!(text.ends_with("\t0\nEOF\n"));
/// # Ok::<(), minidxf::DxfError>(())
/// ```
pub struct DxfWriter<W: Write> {
    writer: DxfTextWriter<W>,
    layer: Option<String>,
    handles: HandleSeed,
    state: WriterState,
    config: DxfWriterConfiguration,
}

impl<W: Write> DxfWriter<W> {
    /// Create a full-capability session with the default configuration
    pub fn new(sink: W) -> Self {
        Self::with_configuration(sink, DxfWriterConfiguration::default())
    }

    /// Create a session without tables or handles
    pub fn minimal(sink: W) -> Self {
        Self::with_configuration(sink, DxfWriterConfiguration::minimal())
    }

    /// Create a session with an explicit configuration
    pub fn with_configuration(sink: W, config: DxfWriterConfiguration) -> Self {
        log::debug!(
            capabilities = ?config.capabilities,
            strict = config.strict,
            "dxf writer session created"
        );
        Self {
            writer: DxfTextWriter::new(sink),
            layer: config.default_layer.clone(),
            handles: HandleSeed::new(),
            state: WriterState::Idle,
            config,
        }
    }

    /// The session configuration
    pub fn configuration(&self) -> &DxfWriterConfiguration {
        &self.config
    }

    /// Current position in the document structure
    pub fn state(&self) -> WriterState {
        self.state
    }

    /// The layer subsequent entities are tagged with
    pub fn active_layer(&self) -> Option<&str> {
        self.layer.as_deref()
    }

    /// The handle the next handle-bearing record will receive
    pub fn next_handle(&self) -> Handle {
        self.handles.peek()
    }

    /// Get a reference to the sink
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    /// Flush the sink
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }

    /// End the session and hand back the sink
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Set the layer for subsequent entities.
    ///
    /// `None` or an empty name falls back to the configured default layer
    /// (or leaves no layer active when there is none).
    pub fn set_layer(&mut self, layer: Option<&str>) {
        self.layer = match layer {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => self.config.default_layer.clone(),
        };
        log::debug!(layer = ?self.layer, "active layer changed");
    }

    /// Write the end-of-file marker. Must be the last record.
    pub fn end(&mut self) -> Result<()> {
        self.expect("end", |state| matches!(state, WriterState::Idle))?;
        self.writer.write_eof()?;
        self.state = WriterState::Finished;
        log::debug!(next_handle = self.handles.peek().value(), "dxf document finished");
        Ok(())
    }

    /// Reject `operation` unless `allowed` accepts the current state.
    /// Always passes when strict ordering is off.
    fn expect(
        &self,
        operation: &'static str,
        allowed: impl FnOnce(&WriterState) -> bool,
    ) -> Result<()> {
        if !self.config.strict || allowed(&self.state) {
            Ok(())
        } else {
            Err(DxfError::OutOfOrder {
                operation,
                state: self.state,
            })
        }
    }

    fn require_full(&self, operation: &'static str) -> Result<()> {
        match self.config.capabilities {
            Capabilities::Full => Ok(()),
            Capabilities::Minimal => Err(DxfError::CapabilityDisabled(operation)),
        }
    }

    /// Write group 5 with a freshly allocated handle
    fn write_next_handle(&mut self) -> Result<()> {
        let handle = self.handles.allocate();
        self.writer.write_handle(5, handle)
    }

    /// Write the record type followed by the active layer.
    /// Fails before writing anything when no layer is active.
    fn write_entity_header(&mut self, kind: EntityKind) -> Result<()> {
        if !kind.has_layer() {
            return self.writer.write_entity_type(kind.name());
        }
        let layer = self.layer.as_deref().ok_or(DxfError::LayerNotSet)?;
        self.writer.write_entity_type(kind.name())?;
        self.writer.write_string(8, layer)?;
        Ok(())
    }
}
