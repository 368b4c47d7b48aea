use std::sync::Arc;

use iced::{
    alignment,
    widget::{button, column, image, row, text, text_input},
    Element, Task,
};
use service::{assign_service::AssignService, error::Error};

use crate::defaults::{DEFAULT_PADDING, DEFAULT_SPACING, ICON_WIDTH};

static FORM_ICON: &[u8] = include_bytes!("../../assets/laptop.png");

pub struct AssignFormWidget {
    input_value: String,
    submitting: bool,
    assign_service: Arc<AssignService>,
}

#[derive(Debug, Clone)]
pub enum AssignFormWidgetMessage {
    InputValueUpdated(String),
    Submit,
    Cancel,
    FinishedAssign(Result<String, Error>),
}

impl AssignFormWidget {
    pub fn new(assign_service: Arc<AssignService>) -> Self {
        Self {
            input_value: "".to_string(),
            submitting: false,
            assign_service,
        }
    }

    pub fn update(&mut self, message: AssignFormWidgetMessage) -> Task<AssignFormWidgetMessage> {
        match message {
            AssignFormWidgetMessage::InputValueUpdated(value) => {
                self.input_value = value;
                Task::none()
            }
            AssignFormWidgetMessage::Cancel => {
                // Close requests are ignored mid-flight, same as the disabled
                // buttons: once the management commands run there is no way
                // to abort them.
                if self.submitting {
                    return Task::none();
                }
                tracing::info!("User has closed the app");
                iced::exit()
            }
            AssignFormWidgetMessage::Submit => {
                if self.submitting {
                    return Task::none();
                }
                self.submitting = true;
                tracing::info!("User has submitted");

                let assign_service = Arc::clone(&self.assign_service);
                let input = self.input_value.clone();
                Task::perform(
                    async move { assign_service.assign(&input).await },
                    AssignFormWidgetMessage::FinishedAssign,
                )
            }
            AssignFormWidgetMessage::FinishedAssign(result) => match result {
                Ok(_hostname) => iced::exit(),
                Err(err) => {
                    // Failure is reported on the console only, never via a
                    // dialog. The process must not survive a failed step.
                    match &err {
                        Error::RenameFailed(message) => {
                            tracing::error!("Rename failed! {}", message);
                        }
                        Error::InventoryFailed(message) => {
                            tracing::error!("Inventory update failed! {}", message);
                        }
                    }
                    std::process::exit(1);
                }
            },
        }
    }

    pub fn view(&self) -> Element<AssignFormWidgetMessage> {
        let icon_panel = image(image::Handle::from_bytes(FORM_ICON)).width(ICON_WIDTH);

        let instruction = text(
            "Please enter the computer number located\n on the sticker label after the letters \"CPU\":",
        );

        let input = text_input("", &self.input_value)
            .on_input(AssignFormWidgetMessage::InputValueUpdated)
            .width(ICON_WIDTH);

        // Both buttons go dead while the management commands run: there is no
        // way to abort an in-flight call.
        let buttons = row![
            button("Cancel").on_press_maybe(
                (!self.submitting).then_some(AssignFormWidgetMessage::Cancel)
            ),
            button("Assign").on_press_maybe(
                (!self.submitting).then_some(AssignFormWidgetMessage::Submit)
            ),
        ]
        .spacing(DEFAULT_SPACING);

        column![icon_panel, instruction, input, buttons]
            .padding(DEFAULT_PADDING)
            .spacing(DEFAULT_SPACING)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}
