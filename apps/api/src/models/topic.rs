use serde::Serialize;

/// A selectable technology topic. `id` is stable and unique across the
/// catalog; `name` is both the display label and the generation subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDef {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDef {
    pub title: &'static str,
    pub topics: &'static [TopicDef],
}
