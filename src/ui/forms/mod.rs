//! Creation forms for Entes and Supervisores

mod ente_form;
mod select_entes_panel;
mod supervisor_form;

pub use ente_form::CreateEnteForm;
pub use select_entes_panel::SelectEntesPanel;
pub use supervisor_form::CreateSupervisorForm;
