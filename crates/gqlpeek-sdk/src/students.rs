//! In-memory student dataset served through a local GraphQL schema.

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject, ID};

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Student {
    pub id: ID,
    pub name: String,
    pub age: i32,
    pub program: String,
    pub gpa: f64,
    pub email: String,
}

/// Read-only student records, injected into the schema as context data.
#[derive(Debug, Clone, Default)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// The fixed demo dataset.
    pub fn seeded() -> Self {
        let seed = [
            ("1", "María López", 20, "Comunicación", 4.3, "maria.lopez@example.com"),
            ("2", "Juan Restrepo", 22, "Ing. Informática", 4.1, "juan.restrepo@example.com"),
            ("3", "Nicolás Urrea", 21, "Diseño", 3.9, "nicolas.urrea@example.com"),
            ("4", "Samuel Acero", 23, "Administración", 4.5, "samuel.acero@example.com"),
        ];
        Self::new(
            seed.into_iter()
                .map(|(id, name, age, program, gpa, email)| Student {
                    id: ID::from(id),
                    name: name.to_string(),
                    age,
                    program: program.to_string(),
                    gpa,
                    email: email.to_string(),
                })
                .collect(),
        )
    }

    pub fn all(&self) -> &[Student] {
        &self.students
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every student in the store.
    async fn students(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Student>> {
        Ok(ctx.data::<StudentStore>()?.all().to_vec())
    }
}

pub type StudentsSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the students schema over `store`.
pub fn build_schema(store: StudentStore) -> StudentsSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}
