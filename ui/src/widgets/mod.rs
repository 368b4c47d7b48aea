pub mod assign_form_widget;
