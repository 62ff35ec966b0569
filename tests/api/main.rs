mod contact;
mod contact_form;
