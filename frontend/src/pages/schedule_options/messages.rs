use common::model::options::ScheduleOptionsResponse;

pub enum Msg {
    ReceiveOptions(ScheduleOptionsResponse),
    FetchFailed,
}
