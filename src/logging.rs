// Macros file - tracing macros are referenced by full path inside the macro bodies

// Standardized logging macros so every layer uses the same field names
// (`component`, `operation`, `card_id`, `deck_id`) and message patterns.

// ============================================================================
// Scheduler Logging Macros
// ============================================================================

/// Log the outcome of one scheduling pass
#[macro_export]
macro_rules! log_scheduler {
    (scheduled, card_id = $card_id:expr, repetition = $rep:expr, interval_days = $interval:expr, next_review = $next:expr) => {
        tracing::debug!(
            component = "scheduler",
            card_id = %$card_id,
            repetition = $rep,
            interval_days = $interval,
            next_review = %$next,
            "Card scheduled"
        );
    };
    (fallback, card_id = $card_id:expr, $msg:expr) => {
        tracing::debug!(
            component = "scheduler",
            card_id = %$card_id,
            "Scheduler fallback: {}", $msg
        );
    };
}

// ============================================================================
// Service Layer Logging Macros
// ============================================================================

/// Log service operation start with context
#[macro_export]
macro_rules! log_service_start {
    ($service:expr, $operation:expr, deck_id = $deck_id:expr, card_count = $count:expr) => {
        tracing::info!(
            service = $service,
            operation = $operation,
            deck_id = %$deck_id,
            card_count = $count,
            "Service operation started"
        );
    };
    ($service:expr, $operation:expr, card_id = $card_id:expr) => {
        tracing::info!(
            service = $service,
            operation = $operation,
            card_id = %$card_id,
            "Service operation started"
        );
    };
    ($service:expr, $operation:expr) => {
        tracing::info!(
            service = $service,
            operation = $operation,
            "Service operation started"
        );
    };
}

/// Log service operation success
#[macro_export]
macro_rules! log_service_success {
    ($service:expr, $operation:expr, card_count = $count:expr, $msg:expr) => {
        tracing::info!(
            service = $service,
            operation = $operation,
            card_count = $count,
            "Service operation completed: {}", $msg
        );
    };
    ($service:expr, $operation:expr, card_id = $card_id:expr, $msg:expr) => {
        tracing::info!(
            service = $service,
            operation = $operation,
            card_id = %$card_id,
            "Service operation completed: {}", $msg
        );
    };
    ($service:expr, $operation:expr, $msg:expr) => {
        tracing::info!(
            service = $service,
            operation = $operation,
            "Service operation completed: {}", $msg
        );
    };
}

/// Log service operation errors
#[macro_export]
macro_rules! log_service_error {
    ($service:expr, $operation:expr, card_id = $card_id:expr, error = $error:expr) => {
        tracing::error!(
            service = $service,
            operation = $operation,
            card_id = %$card_id,
            error = %$error,
            "Service operation failed"
        );
    };
    ($service:expr, $operation:expr, error = $error:expr) => {
        tracing::error!(
            service = $service,
            operation = $operation,
            error = %$error,
            "Service operation failed"
        );
    };
}

/// Log service warnings
#[macro_export]
macro_rules! log_service_warn {
    ($service:expr, $operation:expr, card_id = $card_id:expr, $msg:expr) => {
        tracing::warn!(
            service = $service,
            operation = $operation,
            card_id = %$card_id,
            "Service warning: {}", $msg
        );
    };
    ($service:expr, $operation:expr, $msg:expr) => {
        tracing::warn!(
            service = $service,
            operation = $operation,
            "Service warning: {}",
            $msg
        );
    };
}

// ============================================================================
// System Event Logging Macros
// ============================================================================

/// Log system startup and shutdown events
#[macro_export]
macro_rules! log_system_event {
    (startup, component = $component:expr, $msg:expr) => {
        tracing::info!(
            event_type = "startup",
            component = $component,
            "System event: {}",
            $msg
        );
    };
    (shutdown, component = $component:expr, $msg:expr) => {
        tracing::info!(
            event_type = "shutdown",
            component = $component,
            "System event: {}",
            $msg
        );
    };
    (config, $msg:expr) => {
        tracing::info!(event_type = "configuration", "System event: {}", $msg);
    };
}

// ============================================================================
// Validation Logging Macros
// ============================================================================

/// Log validation results consistently
#[macro_export]
macro_rules! log_validation {
    (success, $component:expr, $msg:expr) => {
        tracing::debug!(
            event_type = "validation",
            component = $component,
            result = "success",
            "Validation completed: {}", $msg
        );
    };
    (failure, $component:expr, error = $error:expr) => {
        tracing::warn!(
            event_type = "validation",
            component = $component,
            result = "failure",
            error = %$error,
            "Validation failed"
        );
    };
}
