use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let id_name = format_ident!("__DELTA_ECS_COMPONENT_ID_OF_{}", name.to_string().to_uppercase());

    let gen = quote! {
        delta_ecs::lazy_static! {
            static ref #id_name: delta_ecs::components::ComponentId =
                delta_ecs::components::next_component_id();
        }

        impl delta_ecs::components::Component for #name {
            #[inline(always)]
            fn component_id() -> delta_ecs::components::ComponentId {
                *#id_name
            }
        }
    };
    gen.into()
}
