pub mod command_box_sink;
pub mod events;
pub mod fetch_transcript;
pub mod locate_stream;
pub mod track_session;
pub mod watch_page;
