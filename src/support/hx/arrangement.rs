//! Flow arrangements supported by the sizing engine.

use std::fmt;

/// How the two streams are routed relative to one another.
///
/// The arrangement governs which terminal temperature differences feed the
/// LMTD, whether an F correction factor applies, and which ε-NTU family is
/// used in rating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowArrangement {
    /// Pure counter-current flow.
    CounterFlow,
    /// Pure co-current (parallel) flow.
    ParallelFlow,
    /// One shell pass, two tube passes.
    ShellAndTube12,
    /// One shell pass, four tube passes.
    ShellAndTube14,
    /// Cross flow with both streams unmixed.
    CrossFlowUnmixed,
    /// Cross flow with one stream mixed.
    CrossFlowMixed,
}

impl FlowArrangement {
    /// Whether the LMTD uses the parallel-flow terminal differences
    /// (`ΔT1 = Th,in − Tc,in`, `ΔT2 = Th,out − Tc,out`).
    ///
    /// Every other arrangement, counter flow included, uses the counter-flow
    /// differences, with shell and cross variants applying a correction
    /// factor on top.
    #[must_use]
    pub fn uses_parallel_differences(self) -> bool {
        matches!(self, Self::ParallelFlow)
    }

    /// Whether the correction factor is identically one.
    #[must_use]
    pub fn has_unit_correction_factor(self) -> bool {
        matches!(self, Self::CounterFlow | Self::ParallelFlow)
    }
}

impl fmt::Display for FlowArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CounterFlow => "counter flow",
            Self::ParallelFlow => "parallel flow",
            Self::ShellAndTube12 => "shell-and-tube 1-2",
            Self::ShellAndTube14 => "shell-and-tube 1-4",
            Self::CrossFlowUnmixed => "cross flow (unmixed)",
            Self::CrossFlowMixed => "cross flow (mixed)",
        };
        f.write_str(label)
    }
}
