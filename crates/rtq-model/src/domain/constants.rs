/// Well-known file name of the durable queue record.
///
/// The record lives at a fixed location chosen at bootstrap; the file name
/// never changes so that an interrupted run can always be found again.
pub const QUEUE_FILE_NAME: &str = "retarget_queue.json";
