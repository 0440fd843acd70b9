use crate::app::navigator::{NavigationOutcome, NavigationTarget};
use crate::domain::hint::{DocumentScan, HintKind, NavigationHint};
use crate::domain::interface::{InterfaceBlock, MethodSignature};
use crate::domain::ports::Location;
use crate::domain::receiver::ReceiverMethodDecl;
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// All lines and columns below are 0-based; columns count characters.

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub workspace: String,
    pub oracle: String,
    pub lookahead_lines: usize,
}

/// A document given either by path (relative to the workspace) or inline text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DocumentRequest {
    pub path: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HintDto {
    pub anchor_line: usize,
    pub anchor_start_col: usize,
    /// Exclusive.
    pub anchor_end_col: usize,
    pub method_name: String,
    /// `interface_side` or `receiver_side`.
    pub kind: String,
    pub context: String,
}

impl From<&NavigationHint> for HintDto {
    fn from(hint: &NavigationHint) -> Self {
        Self {
            anchor_line: hint.anchor_line,
            anchor_start_col: hint.anchor_start_col,
            anchor_end_col: hint.anchor_end_col,
            method_name: hint.method_name.clone(),
            kind: match hint.kind {
                HintKind::InterfaceSide => "interface_side",
                HintKind::ReceiverSide => "receiver_side",
            }
            .to_string(),
            context: hint.context.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HintsResponse {
    pub document: Option<String>,
    pub hints: Vec<HintDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MethodDto {
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub span_end_line: usize,
}

impl From<&MethodSignature> for MethodDto {
    fn from(m: &MethodSignature) -> Self {
        Self {
            name: m.name.clone(),
            line: m.line,
            column: m.column,
            span_end_line: m.span_end_line,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InterfaceDto {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub methods: Vec<MethodDto>,
}

impl From<&InterfaceBlock> for InterfaceDto {
    fn from(block: &InterfaceBlock) -> Self {
        Self {
            name: block.name.clone(),
            start_line: block.start_line,
            end_line: block.end_line,
            methods: block.methods.iter().map(MethodDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReceiverMethodDto {
    pub receiver_type: String,
    /// Empty for anonymous receivers.
    pub receiver_name: String,
    pub name: String,
    pub column: usize,
    pub start_line: usize,
    pub end_line: usize,
}

impl From<&ReceiverMethodDecl> for ReceiverMethodDto {
    fn from(d: &ReceiverMethodDecl) -> Self {
        Self {
            receiver_type: d.receiver_type.clone(),
            receiver_name: d.receiver_name.clone(),
            name: d.name.clone(),
            column: d.column,
            start_line: d.start_line,
            end_line: d.end_line,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanResponse {
    pub document: Option<String>,
    pub interfaces: Vec<InterfaceDto>,
    pub receiver_methods: Vec<ReceiverMethodDto>,
}

impl ScanResponse {
    pub fn new(document: Option<String>, scan: &DocumentScan) -> Self {
        Self {
            document,
            interfaces: scan.interfaces.iter().map(InterfaceDto::from).collect(),
            receiver_methods: scan
                .receiver_methods
                .iter()
                .map(ReceiverMethodDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NavigateRequest {
    /// Go file, relative to the workspace or absolute.
    pub path: String,
    pub line: usize,
    /// Column on the method name; without it the first hint on the line is used.
    pub column: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationDto {
    pub document: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl From<&Location> for LocationDto {
    fn from(loc: &Location) -> Self {
        Self {
            document: loc.document.clone(),
            start_line: loc.range.start.line,
            start_column: loc.range.start.character,
            end_line: loc.range.end.line,
            end_column: loc.range.end.character,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TargetDto {
    pub label: String,
    pub detail: String,
    pub location: LocationDto,
}

impl From<&NavigationTarget> for TargetDto {
    fn from(target: &NavigationTarget) -> Self {
        Self {
            label: target.label.clone(),
            detail: target.detail.clone(),
            location: LocationDto::from(&target.location),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NavigateResponse {
    pub hint: HintDto,
    /// `jump`, `pick` or `notice`.
    pub outcome: String,
    pub targets: Vec<TargetDto>,
    pub message: Option<String>,
}

impl NavigateResponse {
    pub fn new(hint: &NavigationHint, outcome: &NavigationOutcome) -> Self {
        let (kind, message) = match outcome {
            NavigationOutcome::Jump(_) => ("jump", None),
            NavigationOutcome::Pick(_) => ("pick", None),
            NavigationOutcome::Notice(msg) => ("notice", Some(msg.clone())),
        };
        Self {
            hint: HintDto::from(hint),
            outcome: kind.to_string(),
            targets: outcome.targets().iter().map(TargetDto::from).collect(),
            message,
        }
    }
}
