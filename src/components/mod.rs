//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Modals are pure controlled-input forms: they render caller-supplied data
//! and invoke caller-supplied callbacks with the entered values. The owning
//! page issues the actual requests.

pub mod answer_report_modal;
pub mod cancel_modal;
pub mod manage_ticket_modal;
pub mod payment_modal;
pub mod support_widget;
