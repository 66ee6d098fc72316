//! Result ranking for presentation.

use crate::models::Job;

/// Orders eligible jobs for display.
///
/// Featured jobs precede all non-featured jobs; within each partition,
/// jobs sort by title using case-insensitive lexical comparison. The sort
/// is stable, so jobs with equal titles retain their relative input order,
/// and ranking an already-ranked collection is a no-op.
///
/// # Example
///
/// ```
/// use job_eligibility_engine::matching::rank;
/// # use job_eligibility_engine::models::Job;
/// # fn job(title: &str, featured: bool) -> Job {
/// #     Job {
/// #         id: 0, title: title.into(), location: String::new(),
/// #         pay: String::new(), home_time: String::new(),
/// #         experience: String::new(), equipment: String::new(),
/// #         description: String::new(), requirements: vec![],
/// #         featured, active: true, region_restriction: None,
/// #         apply_url: String::new(),
/// #     }
/// # }
///
/// let ranked = rank(vec![
///     job("Zebra Route", true),
///     job("Alpha Route", false),
///     job("Beta Route", true),
/// ]);
/// let titles: Vec<&str> = ranked.iter().map(|j| j.title.as_str()).collect();
/// assert_eq!(titles, vec!["Beta Route", "Zebra Route", "Alpha Route"]);
/// ```
pub fn rank(mut jobs: Vec<Job>) -> Vec<Job> {
    jobs.sort_by_cached_key(|job| (!job.featured, job.title.to_lowercase()));
    jobs
}
