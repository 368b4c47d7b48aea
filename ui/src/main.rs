mod defaults;
mod logging;
mod widgets;

use std::sync::Arc;

use iced::{window, Size, Task};
use management_runner::ops::DefaultManagementRunnerOps;
use service::assign_service::AssignService;
use widgets::assign_form_widget::{AssignFormWidget, AssignFormWidgetMessage};

use defaults::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> iced::Result {
    logging::init_logging();
    tracing::info!("Starting app");

    iced::application(Ui::title, Ui::update, Ui::view)
        .window(window::Settings {
            size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            position: window::Position::Centered,
            resizable: false,
            level: window::Level::AlwaysOnTop,
            // Close requests route through the Cancel path so it can log and
            // exit cleanly.
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .subscription(Ui::subscription)
        .run_with(Ui::new)
}

struct Ui {
    assign_form: AssignFormWidget,
}

#[derive(Debug, Clone)]
enum Message {
    AssignForm(AssignFormWidgetMessage),
    WindowCloseRequested,
}

impl Ui {
    fn new() -> (Self, Task<Message>) {
        let runner = Arc::new(DefaultManagementRunnerOps::default());
        let assign_service = Arc::new(AssignService::new(runner));
        (
            Self {
                assign_form: AssignFormWidget::new(assign_service),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "Assign CPU Number".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AssignForm(message) => {
                self.assign_form.update(message).map(Message::AssignForm)
            }
            Message::WindowCloseRequested => self
                .assign_form
                .update(AssignFormWidgetMessage::Cancel)
                .map(Message::AssignForm),
        }
    }

    fn view(&self) -> iced::Element<Message> {
        self.assign_form.view().map(Message::AssignForm)
    }

    fn subscription(&self) -> iced::Subscription<Message> {
        window::close_requests().map(|_| Message::WindowCloseRequested)
    }
}
