//! Job status enum mapping to the `job_statuses` lookup table.
//!
//! Discriminants match the seed data order (1-based) in the
//! migration. The lifecycle is strictly monotonic:
//! pending -> processing -> done. There is no failed status; a job
//! whose pipeline errors out stays in `processing` permanently.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Job lifecycle status.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending = 1,
    Processing = 2,
    Done = 3,
}

impl JobStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// The lowercase name used in API responses.
    pub fn name(self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Done => "done",
        }
    }

    /// Map a database status ID back to the enum.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(JobStatus::Pending),
            2 => Some(JobStatus::Processing),
            3 => Some(JobStatus::Done),
            _ => None,
        }
    }
}

impl From<JobStatus> for StatusId {
    fn from(value: JobStatus) -> Self {
        value as StatusId
    }
}
