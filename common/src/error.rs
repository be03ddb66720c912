use thiserror::Error;

/// Numeric-domain failures raised by the formula evaluators and sweeps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A formula was asked to evaluate at an input where it is undefined,
    /// e.g. a zero velocity in the de Broglie wavelength.
    #[error("{quantity} is undefined for {input}: {reason}")]
    Domain {
        quantity: &'static str,
        input: String,
        reason: &'static str,
    },

    /// The formula is defined but the result is not representable.
    #[error("{quantity} is not finite for {input}")]
    NonFinite { quantity: &'static str, input: String },

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),
}

impl PhysicsError {
    pub fn domain(quantity: &'static str, input: impl Into<String>, reason: &'static str) -> Self {
        Self::Domain {
            quantity,
            input: input.into(),
            reason,
        }
    }

    pub fn non_finite(quantity: &'static str, input: impl Into<String>) -> Self {
        Self::NonFinite {
            quantity,
            input: input.into(),
        }
    }
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Failures while bringing up the window and GPU surface.
#[derive(Error, Debug)]
pub enum GraphicsError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter found")]
    NoAdapter,

    #[error("Failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Top-level error returned by the exercise binaries.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Physics error: {0}")]
    Physics(#[from] PhysicsError),

    #[error("Graphics error: {0}")]
    Graphics(#[from] GraphicsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_message_names_quantity_and_input() {
        let err = PhysicsError::domain("de Broglie wavelength", "v = 0 m/s", "division by zero");
        assert_eq!(
            err.to_string(),
            "de Broglie wavelength is undefined for v = 0 m/s: division by zero"
        );
    }

    #[test]
    fn physics_error_converts_into_app_error() {
        let app: AppError = PhysicsError::InvalidSweep("empty".into()).into();
        assert_eq!(app.to_string(), "Physics error: Invalid sweep: empty");
    }
}
