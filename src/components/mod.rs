mod badge;
mod button;
mod card;
mod input;
mod section_header;

pub use badge::{ Badge, BadgeVariant };
pub use button::{ Button, ButtonSize, ButtonVariant };
pub use card::{ Card, CardContent, CardHeader, CardTitle };
pub use input::{ TextArea, TextInput };
pub use section_header::SectionHeader;
