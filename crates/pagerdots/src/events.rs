use dotwin::PagerCommand;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Show,
    Hide,
    Next,
    Prev,
    Page(usize),
    Count(usize),
    ConfigReload,
}

impl From<PagerCommand> for AppEvent {
    fn from(command: PagerCommand) -> Self {
        match command {
            PagerCommand::Next => AppEvent::Next,
            PagerCommand::Prev => AppEvent::Prev,
            PagerCommand::Page(n) => AppEvent::Page(n),
            PagerCommand::Count(n) => AppEvent::Count(n),
            PagerCommand::Show => AppEvent::Show,
            PagerCommand::Hide => AppEvent::Hide,
        }
    }
}
