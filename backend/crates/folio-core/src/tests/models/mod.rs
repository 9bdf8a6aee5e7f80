mod new_project;
mod project;
mod project_changes;
mod project_query;
