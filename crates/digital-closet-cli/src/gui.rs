use digital_closet_core::frame::load_frame;
use digital_closet_core::{logging, Category, Closet, Config, Direction};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use log::warn;

/// What a pane currently shows
enum PaneContent {
    Picture(Handle),
    /// Decoding failed; holds the error text
    Unavailable(String),
}

struct Pane {
    identifier: String,
    content: PaneContent,
}

/// Closet window state
struct ClosetApp {
    closet: Closet,
    config: Config,
    top: Pane,
    bottom: Pane,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A previous/next button was pressed
    Step(Category, Direction),
}

impl ClosetApp {
    fn new(closet: Closet, config: Config) -> (Self, Task<Message>) {
        let top = load_pane(&closet, &config, Category::Top);
        let bottom = load_pane(&closet, &config, Category::Bottom);

        (
            ClosetApp {
                closet,
                config,
                top,
                bottom,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.config.window_title.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Step(category, direction) => {
                self.closet.step(category, direction);
                let pane = load_pane(&self.closet, &self.config, category);
                match category {
                    Category::Top => self.top = pane,
                    Category::Bottom => self.bottom = pane,
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        column![self.pane(Category::Top), self.pane(Category::Bottom)]
            .spacing(10)
            .padding(10)
            .align_x(Alignment::Center)
            .into()
    }

    /// One image with its previous/next buttons underneath
    fn pane(&self, category: Category) -> Element<Message> {
        let pane = match category {
            Category::Top => &self.top,
            Category::Bottom => &self.bottom,
        };
        let width = Length::Fixed(self.config.frame_width as f32);
        let height = Length::Fixed(self.config.frame_height as f32);

        let picture: Element<Message> = match &pane.content {
            PaneContent::Picture(handle) => image(handle.clone()).width(width).height(height).into(),
            PaneContent::Unavailable(reason) => container(
                text(format!("Could not show {}: {}", pane.identifier, reason)).size(14),
            )
            .center_x(width)
            .center_y(height)
            .into(),
        };

        let controls = row![
            button(text(format!("Previous {}", category)))
                .on_press(Message::Step(category, Direction::Previous)),
            Space::with_width(Length::Fill),
            button(text(format!("Next {}", category)))
                .on_press(Message::Step(category, Direction::Next)),
        ]
        .width(width)
        .align_y(Alignment::Center);

        column![picture, controls]
            .spacing(4)
            .align_x(Alignment::Center)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Decode the current image of a category at the configured frame size
fn load_pane(closet: &Closet, config: &Config, category: Category) -> Pane {
    let identifier = closet.current(category).to_string();
    let path = closet.current_path(category);

    let content = match load_frame(&path, config.frame_width, config.frame_height) {
        Ok(frame) => PaneContent::Picture(Handle::from_rgba(frame.width, frame.height, frame.pixels)),
        Err(e) => {
            logging::log_file_error(&path, "load", &e);
            warn!("Showing placeholder for {} {}", category, identifier);
            PaneContent::Unavailable(e.to_string())
        }
    };

    Pane {
        identifier,
        content,
    }
}

/// Run the closet window until it is closed
pub fn run(closet: Closet, config: Config) -> iced::Result {
    let size = Size::new(config.window_width as f32, config.window_height as f32);

    iced::application(ClosetApp::title, ClosetApp::update, ClosetApp::view)
        .theme(ClosetApp::theme)
        .window_size(size)
        .centered()
        .run_with(move || ClosetApp::new(closet, config))
}
