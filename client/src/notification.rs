/// Toast shown to the user once an action settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl Notification {
    pub const fn info(title: &'static str) -> Self {
        Notification {
            kind: NotificationKind::Info,
            title,
            description: None,
        }
    }

    pub const fn success(title: &'static str) -> Self {
        Notification {
            kind: NotificationKind::Success,
            title,
            description: None,
        }
    }

    pub const fn error(title: &'static str) -> Self {
        Notification {
            kind: NotificationKind::Error,
            title,
            description: None,
        }
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

pub const SERVER_ERROR: Notification = Notification::error("Erro no servidor")
    .with_description("Entre em contato com a equipe de T.I. ou tente novamente mais tarde.");
